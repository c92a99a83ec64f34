//! Kernel package name parsing
//!
//! Package names follow the grammar
//!
//! ```text
//! linux-<kind>-<major>.<minor>.<patch>-<build><suffix>
//! ```
//!
//! where `kind` is one of `headers`, `image`, `modules`, `modules-extra` and
//! `suffix` is empty (base), `-generic`, or anything else (other).

pub mod arch;
pub mod listing;

pub use arch::arch_is_valid;
pub use listing::parse_listing;

use crate::domain::{BuildType, Component, ComponentKind, KernelVersion};
use crate::error::{Result, name::malformed};

const PREFIX: &str = "linux-";

/// Kind prefixes, longest first so `modules-extra` wins over `modules`
const KIND_PREFIXES: [(&str, ComponentKind); 4] = [
    ("modules-extra-", ComponentKind::ModulesExtra),
    ("modules-", ComponentKind::Modules),
    ("headers-", ComponentKind::Headers),
    ("image-", ComponentKind::Image),
];

/// Parse one package name into a component
pub fn parse_name(name: &str) -> Result<Component> {
    let rest = name
        .strip_prefix(PREFIX)
        .ok_or_else(|| malformed(name, "missing 'linux-' prefix"))?;

    let (kind, rest) = KIND_PREFIXES
        .iter()
        .find_map(|(prefix, kind)| rest.strip_prefix(prefix).map(|rest| (*kind, rest)))
        .ok_or_else(|| malformed(name, "unknown component kind"))?;

    let (major, rest) = number(name, rest, "major version")?;
    let rest = separator(name, rest, '.', "major version")?;
    let (minor, rest) = number(name, rest, "minor version")?;
    let rest = separator(name, rest, '.', "minor version")?;
    let (patch, rest) = number(name, rest, "patch version")?;
    let rest = separator(name, rest, '-', "patch version")?;
    let (build, suffix) = number(name, rest, "build number")?;

    Ok(Component {
        name: name.to_string(),
        kind,
        version: KernelVersion::new(major, minor, patch, build),
        build_type: BuildType::from_suffix(suffix),
    })
}

fn number<'a>(name: &str, input: &'a str, field: &str) -> Result<(u32, &'a str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (digits, rest) = input.split_at(end);
    if digits.is_empty() {
        return Err(malformed(name, format!("expected {field}")));
    }
    let value = digits
        .parse::<u32>()
        .map_err(|e| malformed(name, format!("invalid {field} '{digits}': {e}")))?;
    Ok((value, rest))
}

fn separator<'a>(name: &str, input: &'a str, sep: char, after: &str) -> Result<&'a str> {
    input
        .strip_prefix(sep)
        .ok_or_else(|| malformed(name, format!("expected '{sep}' after {after}")))
}
