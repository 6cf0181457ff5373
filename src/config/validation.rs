use super::settings::{FatalConfig, PanConfig};
use crate::errors::PanError;
use anyhow::Result;
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}
impl ValidationResult {
    /// First error as a [`PanError::InvalidConfig`], if any.
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(err) => Err(PanError::invalid_config(&err.field, err.message).into()),
            None => Ok(()),
        }
    }
}
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
pub struct ConfigValidator;
impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }
    pub fn validate_config(&self, config: &PanConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        self.validate_fatal_config(&config.fatal, &mut errors, &mut warnings);
        self.validate_workers(config.workers, &mut errors, &mut warnings);
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
    fn validate_fatal_config(
        &self,
        config: &FatalConfig,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if config.exit_code == 0 {
            errors
                .push(ValidationError {
                    field: "fatal.exit_code".to_string(),
                    message: "Exit code zero would report success".to_string(),
                    suggestion: Some("Use a status between 1 and 255".to_string()),
                });
        } else if !(1..=255).contains(&config.exit_code) {
            errors
                .push(ValidationError {
                    field: "fatal.exit_code".to_string(),
                    message: format!("Exit code {} is outside 1-255", config.exit_code),
                    suggestion: Some(
                        "Statuses are truncated to 8 bits on Unix".to_string(),
                    ),
                });
        }
        if matches!(& config.prefix, Some(prefix) if prefix.trim().is_empty()) {
            warnings
                .push(ValidationWarning {
                    field: "fatal.prefix".to_string(),
                    message: "Prefix is blank".to_string(),
                    suggestion: Some("Remove the prefix or give it text".to_string()),
                });
        }
    }
    fn validate_workers(
        &self,
        workers: Option<usize>,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        let Some(workers) = workers else {
            return;
        };
        if workers == 0 {
            errors
                .push(ValidationError {
                    field: "workers".to_string(),
                    message: "Worker count cannot be zero".to_string(),
                    suggestion: Some(
                        "Omit workers to size the pool from the CPU count".to_string(),
                    ),
                });
        } else if workers > num_cpus::get() * 4 {
            warnings
                .push(ValidationWarning {
                    field: "workers".to_string(),
                    message: format!(
                        "{} workers is far above the {} available CPUs", workers,
                        num_cpus::get()
                    ),
                    suggestion: None,
                });
        }
    }
    pub fn validate_and_fix_config(&self, config: &mut PanConfig) -> ValidationResult {
        let result = self.validate_config(config);
        if !(1..=255).contains(&config.fatal.exit_code) {
            config.fatal.exit_code = 1;
        }
        if config.workers == Some(0) {
            config.workers = None;
        }
        result
    }
}
impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
