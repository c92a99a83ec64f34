//! Command helper utilities

use std::path::PathBuf;

use crate::config::RemokConfig;
use crate::error::Result;
use crate::operations::{Analysis, analyze_source};
use crate::source::{self, PackageSource};
use crate::ui::Reporter;

/// Everything a command needs from the global options
pub struct Session {
    pub config: RemokConfig,
    pub source: Box<dyn PackageSource>,
    pub reporter: Reporter,
}

impl Session {
    /// Load the configuration and select the package source
    pub fn open(config: Option<PathBuf>, listing: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let reporter = Reporter::new(verbose);
        if let Some(path) = &config {
            reporter.detail(format!("Using configuration {}", path.display()));
        }
        let config = RemokConfig::resolve(config.as_deref())?;

        Ok(Self {
            config,
            source: source::select(listing),
            reporter,
        })
    }

    /// Kernels to keep: the command flag when given, the configuration otherwise
    pub fn keep(&self, flag: Option<u16>) -> usize {
        flag.map_or_else(|| self.config.keep(), usize::from)
    }

    /// Read and analyze the installed packages
    pub fn analyze(&self, keep: usize) -> Result<Analysis> {
        analyze_source(self.source.as_ref(), keep, &self.reporter)
    }
}
