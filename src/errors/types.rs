use thiserror::Error;
/// Errors produced by the mechanism itself rather than by raising code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanError {
    /// Substituted when a zone is asked to raise without an underlying error.
    #[error("raise called with no error")]
    NoError,
    #[error("invalid configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },
}
impl PanError {
    pub fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }
    pub fn is_sentinel(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<PanError>(), Some(PanError::NoError))
    }
}
