//! Listing file source

use std::path::PathBuf;

use crate::error::{
    Result,
    fs::{not_found, read_failed},
};

use super::PackageSource;

/// Reads a listing saved to disk, e.g. `dpkg-query -W -f='${Package}\n' > listing.txt`
#[derive(Debug, Clone)]
pub struct ListingFile {
    path: PathBuf,
}

impl ListingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PackageSource for ListingFile {
    fn describe(&self) -> String {
        format!("listing file {}", self.path.display())
    }

    fn listing(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(not_found(self.path.display().to_string()));
        }
        std::fs::read_to_string(&self.path)
            .map_err(|e| read_failed(self.path.display().to_string(), e.to_string()))
    }
}
