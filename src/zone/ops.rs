use super::tagged::{Tagged, ZoneId};
use crate::errors::PanError;
use log::{debug, trace};
use std::{any::Any, panic};
/// An isolation token for raised errors.
///
/// A zone raises errors by unwinding with a [`Tagged`] payload, and its
/// boundaries only ever convert payloads carrying its own [`ZoneId`] back into
/// errors. Anything else keeps unwinding. Clones share the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
}
impl Zone {
    pub fn new() -> Self {
        Self { id: ZoneId::next() }
    }
    pub fn id(&self) -> ZoneId {
        self.id
    }
    /// Whether `payload` is a [`Tagged`] error raised by this zone.
    pub fn owns(&self, payload: &(dyn Any + Send)) -> bool {
        payload.downcast_ref::<Tagged>().is_some_and(|tagged| tagged.owner() == self.id)
    }
    /// Only the outermost error counts: `anyhow::Error::downcast_ref` also
    /// looks through `.context(..)` layers, which would drop that context.
    fn owns_error(&self, err: &anyhow::Error) -> bool {
        let outermost: &(dyn std::error::Error + Send + Sync + 'static) = &**err;
        outermost.downcast_ref::<Tagged>().is_some_and(|tagged| tagged.owner() == self.id)
    }
    /// Tag `err` as owned by this zone. `None` is replaced by
    /// [`PanError::NoError`] so a raise always carries a cause.
    pub fn wrap<E: Into<anyhow::Error>>(&self, err: Option<E>) -> Tagged {
        let cause = match err {
            Some(err) => err.into(),
            None => PanError::NoError.into(),
        };
        let cause = if self.owns_error(&cause) {
            cause.downcast::<Tagged>().map_or_else(|cause| cause, Tagged::into_cause)
        } else {
            cause
        };
        Tagged::new(cause, self.id)
    }
    /// Abort the current computation with `err`, tagged as owned by this zone.
    ///
    /// Nothing is printed while the payload unwinds, since `resume_unwind`
    /// skips the panic hook. A raise that meets no boundary of this zone
    /// therefore ends its thread silently, and on the main thread the process
    /// exits with status 101 and no message. Wrap the program entry point in
    /// [`Zone::run_or_exit`] so that an unrecovered raise is reported.
    pub fn raise<E: Into<anyhow::Error>>(&self, err: E) -> ! {
        self.throw(self.wrap(Some(err)))
    }
    /// Like [`Zone::raise`], but accepts a missing error.
    pub fn raise_opt(&self, err: Option<anyhow::Error>) -> ! {
        self.throw(self.wrap(err))
    }
    fn throw(&self, tagged: Tagged) -> ! {
        trace!("{} raising: {}", self.id, tagged);
        panic::resume_unwind(Box::new(tagged))
    }
    pub fn check<E: Into<anyhow::Error>>(&self, result: Result<(), E>) {
        if let Err(err) = result {
            self.raise(err)
        }
    }
    pub fn must<T, E: Into<anyhow::Error>>(&self, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.raise(err),
        }
    }
    pub fn must2<T1, T2, E: Into<anyhow::Error>>(
        &self,
        result: Result<(T1, T2), E>,
    ) -> (T1, T2) {
        self.must(result)
    }
    pub fn must3<T1, T2, T3, E: Into<anyhow::Error>>(
        &self,
        result: Result<(T1, T2, T3), E>,
    ) -> (T1, T2, T3) {
        self.must(result)
    }
    /// Classify an unwind payload.
    ///
    /// Returns `None` for no payload and the cause for a payload raised by
    /// this zone. Any other payload is re-raised unchanged, so this call does
    /// not return for it.
    pub fn extract(&self, payload: Option<Box<dyn Any + Send>>) -> Option<anyhow::Error> {
        payload.map(|payload| self.classify(payload))
    }
    pub(crate) fn classify(&self, payload: Box<dyn Any + Send>) -> anyhow::Error {
        if !self.owns(payload.as_ref()) {
            trace!("{} passing through foreign unwind", self.id);
            panic::resume_unwind(payload)
        }
        match payload.downcast::<Tagged>() {
            Ok(tagged) => {
                debug!("{} caught: {}", self.id, tagged);
                tagged.into_cause()
            }
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}
impl Default for Zone {
    fn default() -> Self {
        Self::new()
    }
}
/// Method form of [`Zone::must`].
pub trait ZoneResultExt<T> {
    fn or_raise(self, zone: &Zone) -> T;
}
impl<T, E: Into<anyhow::Error>> ZoneResultExt<T> for Result<T, E> {
    fn or_raise(self, zone: &Zone) -> T {
        zone.must(self)
    }
}
