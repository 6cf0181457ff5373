use crate::zone::Zone;
use std::panic::{self, AssertUnwindSafe};
impl Zone {
    /// Run `f` under a boundary of this zone.
    ///
    /// Completion yields `Ok`, an error raised by this zone yields `Err` with
    /// the raised cause, and every other unwind continues past this frame.
    /// Whatever `f` was doing when it raised is discarded.
    pub fn catch<T, F>(&self, f: F) -> anyhow::Result<T>
    where
        F: FnOnce() -> T,
    {
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| self.classify(payload))
    }
    pub fn recover<F>(&self, f: F) -> Option<anyhow::Error>
    where
        F: FnOnce(),
    {
        self.catch(f).err()
    }
    pub fn recover1<T, F>(&self, f: F) -> (T, Option<anyhow::Error>)
    where
        T: Default,
        F: FnOnce() -> T,
    {
        match self.catch(f) {
            Ok(value) => (value, None),
            Err(err) => (T::default(), Some(err)),
        }
    }
    pub fn recover2<T1, T2, F>(&self, f: F) -> (T1, T2, Option<anyhow::Error>)
    where
        T1: Default,
        T2: Default,
        F: FnOnce() -> (T1, T2),
    {
        match self.catch(f) {
            Ok((a, b)) => (a, b, None),
            Err(err) => (T1::default(), T2::default(), Some(err)),
        }
    }
    pub fn recover3<T1, T2, T3, F>(&self, f: F) -> (T1, T2, T3, Option<anyhow::Error>)
    where
        T1: Default,
        T2: Default,
        T3: Default,
        F: FnOnce() -> (T1, T2, T3),
    {
        match self.catch(f) {
            Ok((a, b, c)) => (a, b, c, None),
            Err(err) => (T1::default(), T2::default(), T3::default(), Some(err)),
        }
    }
}
#[cfg(test)]
mod tests {
    use crate::errors::PanError;
    use crate::zone::Zone;
    use std::{any::Any, io, panic};
    fn error_addr(err: &anyhow::Error) -> *const () {
        &**err as *const (dyn std::error::Error + Send + Sync) as *const ()
    }
    fn catch_foreign(f: impl FnOnce()) -> Box<dyn Any + Send> {
        match panic::catch_unwind(panic::AssertUnwindSafe(f)) {
            Ok(()) => panic!("boundary absorbed a foreign unwind"),
            Err(payload) => payload,
        }
    }
    #[test]
    fn test_same_zone_round_trip_preserves_identity() {
        let zone = Zone::new();
        let err = anyhow::anyhow!("original");
        let addr = error_addr(&err);
        let caught = zone.recover(|| zone.check(Err(err))).unwrap();
        assert_eq!(error_addr(& caught), addr);
        assert_eq!(caught.to_string(), "original");
    }
    #[test]
    fn test_completion_returns_none() {
        let zone = Zone::new();
        let mut ran = false;
        assert!(zone.recover(|| ran = true).is_none());
        assert!(ran);
        assert_eq!(zone.catch(|| "done").unwrap(), "done");
    }
    #[test]
    fn test_cross_zone_raise_is_not_captured() {
        let z1 = Zone::new();
        let z2 = Zone::new();
        let mut inner_returned = false;
        let outer = z2
            .recover(|| {
                let _ = z1.recover(|| z2.raise(anyhow::anyhow!("for z2")));
                inner_returned = true;
            });
        assert!(! inner_returned);
        assert_eq!(outer.unwrap().to_string(), "for z2");
    }
    #[test]
    fn test_nested_same_zone_inner_boundary_wins() {
        let zone = Zone::new();
        let mut inner = None;
        let outer = zone
            .recover(|| {
                inner = zone.recover(|| zone.raise(anyhow::anyhow!("inner")));
            });
        assert!(outer.is_none());
        assert_eq!(inner.unwrap().to_string(), "inner");
    }
    #[test]
    fn test_nil_check_is_noop() {
        let zone = Zone::new();
        let (value, err) = zone
            .recover1(|| {
                zone.check(Ok::<(), io::Error>(()));
                "continued"
            });
        assert_eq!(value, "continued");
        assert!(err.is_none());
    }
    #[test]
    fn test_recover1_zero_value_on_raise() {
        let zone = Zone::new();
        let failing = || {
            zone.check(Err::<(), _>(anyhow::anyhow!("bad")));
            42
        };
        let (value, err) = zone.recover1(failing);
        assert_eq!(value, 0);
        assert_eq!(err.unwrap().to_string(), "bad");
        let (value, err) = zone
            .recover1(|| {
                zone.check(Ok::<(), anyhow::Error>(()));
                42
            });
        assert_eq!(value, 42);
        assert!(err.is_none());
    }
    #[test]
    fn test_recover2_and_recover3() {
        let zone = Zone::new();
        let (a, b, err) = zone.recover2(|| (1u8, String::from("x")));
        assert_eq!((a, b.as_str()), (1, "x"));
        assert!(err.is_none());
        let (a, b, c, err) = zone
            .recover3(|| -> (u8, String, Vec<u8>) {
                zone.raise(anyhow::anyhow!("three"))
            });
        assert_eq!((a, b, c), (0, String::new(), Vec::new()));
        assert_eq!(err.unwrap().to_string(), "three");
    }
    #[test]
    fn test_empty_raise_yields_sentinel() {
        let zone = Zone::new();
        let err = zone.recover(|| zone.raise_opt(None)).unwrap();
        assert!(PanError::is_sentinel(& err));
        assert_eq!(err.to_string(), "raise called with no error");
    }
    #[test]
    fn test_foreign_panic_passes_through() {
        let zone = Zone::new();
        let payload = catch_foreign(|| {
            let _ = zone.recover(|| panic::resume_unwind(Box::new(17u32)));
        });
        assert_eq!(payload.downcast_ref::<u32>(), Some(&17));
    }
    #[test]
    fn test_missing_file_scenario() {
        fn open_file(_path: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
        }
        let zone = Zone::new();
        let read_config = || zone.check(open_file("/missing/path"));
        let err = zone.recover(read_config).unwrap();
        assert_eq!(err.to_string(), "no such file or directory");
        assert_eq!(
            err.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }
}
