//! Kernel grouping and retention policy
//!
//! Components are grouped into one [`Kernel`] per version string. The newest
//! `keep` kernels are always kept, whatever their state. Older kernels are only
//! scheduled for removal when complete: a missing component hints at a broken
//! install, and such kernels are left alone.

use std::collections::HashMap;

use crate::domain::{Component, Kernel};

/// Number of most recent kernels kept by default
pub const DEFAULT_KEEP: usize = 2;

/// Kernels built from a listing, plus the components no kernel took
#[derive(Debug, Default)]
pub struct Inventory {
    /// Ascending by version
    pub kernels: Vec<Kernel>,
    /// Components with a build type no sub-kernel tracks
    pub ignored: Vec<Component>,
}

/// Group components into kernels keyed by version string
pub fn build_inventory<'a>(components: impl IntoIterator<Item = &'a Component>) -> Inventory {
    let mut by_version: HashMap<String, Kernel> = HashMap::new();
    let mut ignored = Vec::new();

    for component in components {
        let kernel = by_version
            .entry(component.version_string())
            .or_insert_with(|| Kernel::new(component.version));
        if !kernel.add_component(component) {
            ignored.push(component.clone());
        }
    }

    let mut kernels: Vec<Kernel> = by_version.into_values().collect();
    kernels.sort();

    Inventory { kernels, ignored }
}

/// Group components into kernels, ascending by version
#[allow(dead_code)] // used in tests
pub fn group_components<'a>(components: impl IntoIterator<Item = &'a Component>) -> Vec<Kernel> {
    build_inventory(components).kernels
}

/// Outcome of the retention policy, every list ascending by version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPlan {
    /// The newest kernels, protected by rank
    pub to_save: Vec<Kernel>,
    /// Older kernels that are complete and safe to purge
    pub to_delete: Vec<Kernel>,
    /// Older kernels left untouched because they are incomplete
    pub skipped: Vec<Kernel>,
}

/// Decide which kernels to keep and which to remove
pub fn plan_retention(mut kernels: Vec<Kernel>, keep: usize) -> RetentionPlan {
    kernels.sort();
    let protected = kernels.split_off(kernels.len().saturating_sub(keep));
    let (to_delete, skipped): (Vec<Kernel>, Vec<Kernel>) =
        kernels.into_iter().partition(Kernel::is_complete);

    RetentionPlan {
        to_save: protected,
        to_delete,
        skipped,
    }
}

/// `(to_save, to_delete)` view of [`plan_retention`]
#[allow(dead_code)] // used in tests
pub fn kernels_to_save_delete(kernels: Vec<Kernel>, keep: usize) -> (Vec<Kernel>, Vec<Kernel>) {
    let plan = plan_retention(kernels, keep);
    (plan.to_save, plan.to_delete)
}
