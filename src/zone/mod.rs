pub mod ops;
pub mod tagged;
pub use ops::{Zone, ZoneResultExt};
pub use tagged::{Tagged, ZoneId};
