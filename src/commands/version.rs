//! Version command implementation
//!
//! Besides the version, this prints the defaults a run falls back to, so a
//! user can tell which configuration file and script path are in play.

use std::path::Path;

use crate::config::{default_config_path, default_output_path};
use crate::domain::PURGE_COMMAND;
use crate::error::Result;
use crate::policy::DEFAULT_KEEP;

/// Run version command
pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}

fn version_lines() -> Vec<String> {
    let config = default_config_path();
    let script = default_output_path().ok();

    vec![
        format!("remok {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Defaults:".to_string(),
        format!("  Kernels kept: {DEFAULT_KEEP}"),
        format!("  Removal command: {PURGE_COMMAND}"),
        format!("  Config file: {}", describe_path(config.as_deref())),
        format!("  Script path: {}", describe_path(script.as_deref())),
    ]
}

fn describe_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string())
}
