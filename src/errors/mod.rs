pub mod types;
pub use types::PanError;
