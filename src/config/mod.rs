//! Configuration file (config.yaml) handling
//!
//! The configuration file is optional. It is looked up in this order:
//! - the path given with `--config` (or `REMOK_CONFIG`)
//! - `<config dir>/remok/config.yaml` when it exists
//!
//! ```yaml
//! output: /var/tmp/remok/kernel_remove
//! keep: 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{
    RemokError, Result,
    config::{invalid, parse_failed, read_failed},
};
use crate::policy::DEFAULT_KEEP;

/// Directory name under the platform config and data directories
const APP_DIR: &str = "remok";

/// Configuration file name
pub const CONFIG_FILE: &str = "config.yaml";

/// File name of the removal script
pub const SCRIPT_FILE: &str = "kernel_remove";

/// Environment variable overriding the script path
pub const OUTPUT_ENV: &str = "REMOK_OUTPUT";

/// Settings read from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemokConfig {
    /// Where the removal script is written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Number of most recent kernels always kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<usize>,
}

impl RemokConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a YAML string
    #[allow(dead_code)] // used in tests
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|err| match err {
            RemokError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Load the explicit file, else the default file if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.keep == Some(0) {
            return Err(invalid("keep must be at least 1"));
        }
        Ok(())
    }

    /// Number of most recent kernels to keep
    pub fn keep(&self) -> usize {
        self.keep.unwrap_or(DEFAULT_KEEP)
    }

    /// Script path: `explicit`, then `REMOK_OUTPUT`, then `output`, then the default
    pub fn output_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(OUTPUT_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = &self.output {
            return Ok(path.clone());
        }
        default_output_path()
    }
}

/// `<config dir>/remok/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<local data dir>/remok/kernel_remove`
pub fn default_output_path() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| invalid("Could not determine a data directory for the script; set 'output'"))?;
    Ok(base.join(APP_DIR).join(SCRIPT_FILE))
}
