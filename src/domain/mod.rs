//! Domain models for remok
//!
//! This module contains pure domain objects representing installed kernel packages.
//! These types perform no I/O and carry the completeness and ordering invariants
//! the retention policy relies on.

pub mod component;
pub mod kernel;
pub mod subkernel;

pub use component::{BuildType, Component, ComponentKind, Flavor, KernelVersion};
pub use kernel::Kernel;
pub use subkernel::SubKernel;

/// Command prefix used for every removal line
pub const PURGE_COMMAND: &str = "apt purge";

/// Format one removal line for a package
pub fn purge_line(package: &str) -> String {
    format!("{PURGE_COMMAND} {package}")
}
