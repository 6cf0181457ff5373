pub mod settings;
pub mod validation;
pub use settings::{FatalConfig, PanConfig};
pub use validation::{ConfigValidator, ValidationResult, ValidationError};
