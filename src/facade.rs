//! Module-local `check`/`must` helpers bound to a zone the module owns.
//!
//! ```
//! use pan::{Lazy, Zone};
//!
//! static ZONE: Lazy<Zone> = Lazy::new(Zone::new);
//! pan::mustcheck_fns!(ZONE);
//!
//! fn internal() -> u64 {
//!     check(std::fs::metadata(".").map(|_| ()));
//!     must("42".parse::<u64>())
//! }
//!
//! pub fn public() -> pan::Result<u64> {
//!     ZONE.catch(internal)
//! }
//! # assert_eq!(public().unwrap(), 42);
//! ```
/// Generate `fn check(Result<(), E>)` forwarding to [`crate::Zone::check`].
#[macro_export]
macro_rules! check_fns {
    ($zone:path) => {
        #[allow(dead_code)]
        fn check<E>(result: ::core::result::Result<(), E>)
        where
            E: ::core::convert::Into<$crate::Error>,
        {
            $crate::Zone::check(&$zone, result)
        }
    };
}
/// Generate `must`, `must2` and `must3` forwarding to the [`crate::Zone`]
/// methods of the same names.
#[macro_export]
macro_rules! must_fns {
    ($zone:path) => {
        #[allow(dead_code)]
        fn must<T, E>(result: ::core::result::Result<T, E>) -> T
        where
            E: ::core::convert::Into<$crate::Error>,
        {
            $crate::Zone::must(&$zone, result)
        }
        #[allow(dead_code)]
        fn must2<T1, T2, E>(result: ::core::result::Result<(T1, T2), E>) -> (T1, T2)
        where
            E: ::core::convert::Into<$crate::Error>,
        {
            $crate::Zone::must2(&$zone, result)
        }
        #[allow(dead_code)]
        fn must3<T1, T2, T3, E>(
            result: ::core::result::Result<(T1, T2, T3), E>,
        ) -> (T1, T2, T3)
        where
            E: ::core::convert::Into<$crate::Error>,
        {
            $crate::Zone::must3(&$zone, result)
        }
    };
}
#[macro_export]
macro_rules! mustcheck_fns {
    ($zone:path) => {
        $crate::check_fns!($zone);
        $crate::must_fns!($zone);
    };
}
