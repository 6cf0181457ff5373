use crate::config::FatalConfig;
use crate::zone::Zone;
use log::error;
use std::{
    any::Any, io::{self, Write},
    panic::{self, AssertUnwindSafe},
    process,
};
impl Zone {
    /// Outermost boundary for a whole program.
    ///
    /// An error raised by this zone is printed to stderr and the process exits
    /// with status 1. No payload does nothing. Foreign payloads are re-raised.
    pub fn fatal(&self, payload: Option<Box<dyn Any + Send>>) {
        self.fatal_with(payload, &FatalConfig::default())
    }
    pub fn fatal_with(&self, payload: Option<Box<dyn Any + Send>>, config: &FatalConfig) {
        if let Some(payload) = payload {
            self.exit_with(payload, config)
        }
    }
    /// Run `f`, turning an unrecovered raise of this zone into a clean exit.
    pub fn run_or_exit<T, F>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.run_or_exit_with(&FatalConfig::default(), f)
    }
    pub fn run_or_exit_with<T, F>(&self, config: &FatalConfig, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => value,
            Err(payload) => self.exit_with(payload, config),
        }
    }
    /// Classify `payload` like [`Zone::fatal_with`], but write the diagnostic
    /// to `out` and return the exit status instead of exiting.
    pub fn report<W: Write>(
        &self,
        payload: Option<Box<dyn Any + Send>>,
        config: &FatalConfig,
        out: &mut W,
    ) -> Option<i32> {
        let err = self.extract(payload)?;
        Some(self.write_report(&err, config, out))
    }
    fn exit_with(&self, payload: Box<dyn Any + Send>, config: &FatalConfig) -> ! {
        let err = self.classify(payload);
        let code = self.write_report(&err, config, &mut io::stderr().lock());
        process::exit(code)
    }
    fn write_report<W: Write>(
        &self,
        err: &anyhow::Error,
        config: &FatalConfig,
        out: &mut W,
    ) -> i32 {
        if config.log_errors {
            error!("{} unrecovered error: {:#}", self.id(), err);
        }
        let message = if config.show_causes {
            format!("{:#}", err)
        } else {
            err.to_string()
        };
        let _ = match &config.prefix {
            Some(prefix) => writeln!(out, "{}{}", prefix, message),
            None => writeln!(out, "{}", message),
        };
        let _ = out.flush();
        config.status()
    }
}
