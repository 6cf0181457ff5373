use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
/// How an unrecovered raise is reported at the outermost boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatalConfig {
    pub exit_code: i32,
    pub prefix: Option<String>,
    pub show_causes: bool,
    pub log_errors: bool,
}
impl Default for FatalConfig {
    fn default() -> Self {
        Self {
            exit_code: 1,
            prefix: None,
            show_causes: false,
            log_errors: false,
        }
    }
}
impl FatalConfig {
    /// Exit status actually used on termination. Anything outside `1..=255`
    /// would truncate to a success status on Unix, so it falls back to 1.
    pub fn status(&self) -> i32 {
        if (1..=255).contains(&self.exit_code) { self.exit_code } else { 1 }
    }
}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanConfig {
    pub fatal: FatalConfig,
    pub workers: Option<usize>,
}
impl PanConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {:?}", path))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("invalid config file {:?}", path))?;
        Ok(config)
    }
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {:?}", parent))?;
        }
        let data = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data)
            .with_context(|| format!("cannot write temporary file {:?}", tmp))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("cannot atomically replace {:?}", path))?;
        Ok(())
    }
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(default_workers)
    }
}
pub fn default_workers() -> usize {
    (num_cpus::get() * 3 / 4).max(1)
}
