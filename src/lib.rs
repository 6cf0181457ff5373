//! Internal error propagation by unwinding, scoped to a [`Zone`].
//!
//! Code deep inside a computation calls [`Zone::check`] or [`Zone::must`]
//! after fallible operations. On error the zone unwinds with a tagged payload
//! that only a boundary of the same zone ([`Zone::catch`], [`Zone::recover`]
//! and friends) turns back into an ordinary error. Genuine panics and raises
//! of other zones pass through every boundary untouched.
//!
//! ```
//! use pan::Zone;
//! use std::fs;
//!
//! fn internal(zone: &Zone) -> String {
//!     zone.check(fs::metadata("/nonexistent").map(|_| ()));
//!     zone.must(fs::read_to_string("/nonexistent"))
//! }
//!
//! let zone = Zone::new();
//! let err = zone.catch(|| internal(&zone)).unwrap_err();
//! assert!(err.downcast_ref::<std::io::Error>().is_some());
//! ```
#[cfg(panic = "abort")]
compile_error!("pan propagates errors by unwinding and cannot be built with panic = \"abort\"");
pub mod config;
pub mod errors;
pub mod facade;
pub mod fatal;
pub mod recovery;
pub mod zone;
pub use anyhow::{Error, Result};
pub use config::{FatalConfig, PanConfig};
pub use errors::PanError;
pub use once_cell::sync::Lazy;
pub use zone::{Tagged, Zone, ZoneId, ZoneResultExt};
