//! Package listing reader
//!
//! A listing holds one package name per line. Blank lines and lines starting
//! with `#` are ignored. Extra whitespace-separated columns after the name
//! (as printed by `dpkg-query`) are ignored too.

use crate::domain::Component;
use crate::error::Result;

use super::parse_name;

/// Package names in a listing, in order of appearance
pub fn package_names(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
}

/// Parse every package in a listing
///
/// The first malformed name aborts the whole listing.
pub fn parse_listing(text: &str) -> Result<Vec<Component>> {
    package_names(text).map(parse_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildType, ComponentKind};
    use crate::error::RemokError;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "# generated listing\n\nlinux-headers-5.4.0-62\n   \n  # indented comment\nlinux-image-5.4.0-62-generic\n";
        let names: Vec<_> = package_names(text).collect();
        assert_eq!(
            names,
            vec!["linux-headers-5.4.0-62", "linux-image-5.4.0-62-generic"]
        );
    }

    #[test]
    fn test_takes_first_column() {
        let text = "linux-image-5.4.0-62-generic\tamd64\tinstalled\n";
        let names: Vec<_> = package_names(text).collect();
        assert_eq!(names, vec!["linux-image-5.4.0-62-generic"]);
    }

    #[test]
    fn test_parse_listing_in_order() {
        let text = "linux-headers-5.4.0-62\nlinux-modules-extra-5.4.0-62-generic\n";
        let components = parse_listing(text).unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].kind, ComponentKind::Headers);
        assert_eq!(components[0].build_type, BuildType::Base);
        assert_eq!(components[1].kind, ComponentKind::ModulesExtra);
        assert_eq!(components[1].build_type, BuildType::Generic);
    }

    #[test]
    fn test_malformed_line_fails_whole_listing() {
        let text = "linux-headers-5.4.0-62\nlinux-headers-generic\nlinux-image-5.4.0-62-generic\n";
        let err = parse_listing(text).unwrap_err();
        assert!(matches!(
            err,
            RemokError::MalformedName { ref name, .. } if name == "linux-headers-generic"
        ));
    }

    #[test]
    fn test_empty_listing() {
        assert!(parse_listing("").unwrap().is_empty());
        assert!(parse_listing("# nothing here\n\n").unwrap().is_empty());
    }
}
