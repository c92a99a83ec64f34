//! Installed package listing sources
//!
//! A source returns the raw listing consumed by [`crate::parser::parse_listing`]:
//! one package name per line.
//!
//! ## Module Organization
//!
//! - `dpkg.rs`: queries the dpkg database through `dpkg-query`
//! - `file.rs`: reads a listing saved to a file

pub mod dpkg;
pub mod file;

pub use dpkg::DpkgQuery;
pub use file::ListingFile;

use std::path::PathBuf;

use crate::error::Result;

/// Provider of the installed kernel package listing
pub trait PackageSource {
    /// Short human readable description, used in verbose output
    fn describe(&self) -> String;

    /// Newline-delimited package names
    fn listing(&self) -> Result<String>;
}

/// Listing file when one is given, the dpkg database otherwise
pub fn select(listing: Option<PathBuf>) -> Box<dyn PackageSource> {
    match listing {
        Some(path) => Box::new(ListingFile::new(path)),
        None => Box::new(DpkgQuery::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_listing_file() {
        let source = select(Some(PathBuf::from("/tmp/listing.txt")));
        assert!(source.describe().contains("/tmp/listing.txt"));
    }

    #[test]
    fn test_select_dpkg_by_default() {
        let source = select(None);
        assert!(source.describe().contains("dpkg-query"));
    }
}
