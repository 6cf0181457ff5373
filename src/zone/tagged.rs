use std::{
    fmt, num::NonZeroU64, sync::atomic::{AtomicU64, Ordering},
};
static NEXT_ZONE_ID: AtomicU64 = AtomicU64::new(0);
/// Identity token of a zone. Compared by value, never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(NonZeroU64);
impl ZoneId {
    pub(crate) fn next() -> Self {
        let raw = NEXT_ZONE_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::MIN.saturating_add(raw))
    }
    pub fn get(self) -> u64 {
        self.0.get()
    }
}
impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}
/// An error paired with the identity of the zone that raised it.
///
/// This is the unwind payload carried between a raise site and the owning
/// zone's boundary. Only [`crate::Zone::wrap`] creates one.
#[derive(Debug)]
pub struct Tagged {
    cause: anyhow::Error,
    owner: ZoneId,
}
impl Tagged {
    pub(crate) fn new(cause: anyhow::Error, owner: ZoneId) -> Self {
        Self { cause, owner }
    }
    pub fn owner(&self) -> ZoneId {
        self.owner
    }
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
    pub fn into_cause(self) -> anyhow::Error {
        self.cause
    }
}
impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}
impl std::error::Error for Tagged {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let cause: &(dyn std::error::Error + 'static) = self.cause.as_ref();
        Some(cause)
    }
}
