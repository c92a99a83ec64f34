//! Package architecture filter

/// Architectures whose kernel packages are removal candidates
pub const VALID_ARCHITECTURES: [&str; 3] = ["all", "amd64", "i386"];

pub fn arch_is_valid(arch: &str) -> bool {
    VALID_ARCHITECTURES.contains(&arch)
}
