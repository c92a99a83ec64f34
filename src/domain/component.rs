//! Parsed kernel package components

use std::fmt;

use serde::{Serialize, Serializer};

/// Kind of kernel sub-package
///
/// Declaration order is the order in which removal commands are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Headers,
    Modules,
    ModulesExtra,
    Image,
}

impl ComponentKind {
    /// All kinds, in emission order
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Headers,
        ComponentKind::Modules,
        ComponentKind::ModulesExtra,
        ComponentKind::Image,
    ];

    /// Name as it appears in package names
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Headers => "headers",
            ComponentKind::Modules => "modules",
            ComponentKind::ModulesExtra => "modules-extra",
            ComponentKind::Image => "image",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kernel version `major.minor.patch-build`
///
/// Ordering is lexicographic on the four numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KernelVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl KernelVersion {
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }
}

impl From<[u32; 4]> for KernelVersion {
    fn from(parts: [u32; 4]) -> Self {
        Self::new(parts[0], parts[1], parts[2], parts[3])
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

impl Serialize for KernelVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sub-kernel a component can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Packages without a flavor suffix
    Base,
    /// Packages with the `-generic` suffix
    Generic,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Base => "base",
            Flavor::Generic => "generic",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build type derived from the package name suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildType {
    Base,
    Generic,
    /// Any other suffix, kept verbatim (e.g. `-lowlatency`)
    Other(String),
}

impl BuildType {
    /// Classify a suffix following the build number
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "" => BuildType::Base,
            "-generic" => BuildType::Generic,
            other => BuildType::Other(other.to_string()),
        }
    }

    /// Flavor this build type maps to, if any
    pub fn flavor(&self) -> Option<Flavor> {
        match self {
            BuildType::Base => Some(Flavor::Base),
            BuildType::Generic => Some(Flavor::Generic),
            BuildType::Other(_) => None,
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildType::Base => f.write_str("base"),
            BuildType::Generic => f.write_str("generic"),
            BuildType::Other(suffix) => write!(f, "other ({suffix})"),
        }
    }
}

/// One parsed kernel package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    /// Full package name as listed
    pub name: String,
    pub kind: ComponentKind,
    pub version: KernelVersion,
    pub build_type: BuildType,
}

impl Component {
    /// Canonical `major.minor.patch-build` string, the grouping key for kernels
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }
}
