//! Operations module tying the pipeline together
//!
//! listing text → components → kernels → retention plan → removal script.
//! Commands call into this module; it performs no terminal output besides
//! verbose diagnostics through [`Reporter`].

use std::path::PathBuf;

use crate::domain::{Component, Kernel};
use crate::error::Result;
use crate::parser::parse_listing;
use crate::policy::{RetentionPlan, build_inventory, plan_retention};
use crate::script::{ScriptWriter, render_script};
use crate::source::PackageSource;
use crate::ui::Reporter;

/// Kernels found in a listing and what the policy does with them
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Every kernel, ascending by version
    pub kernels: Vec<Kernel>,
    /// Components no sub-kernel tracks (unknown flavor suffix)
    pub ignored: Vec<Component>,
    pub plan: RetentionPlan,
}

/// Parse a listing, group it into kernels and apply the retention policy
///
/// A malformed package name anywhere in the listing fails the whole analysis.
pub fn analyze(listing: &str, keep: usize) -> Result<Analysis> {
    let components = parse_listing(listing)?;
    let inventory = build_inventory(&components);
    let plan = plan_retention(inventory.kernels.clone(), keep);

    Ok(Analysis {
        kernels: inventory.kernels,
        ignored: inventory.ignored,
        plan,
    })
}

/// Retention plan for a listing
#[allow(dead_code)] // used in tests
pub fn plan_from_listing(listing: &str, keep: usize) -> Result<RetentionPlan> {
    Ok(analyze(listing, keep)?.plan)
}

/// Read the listing from `source` and analyze it, reporting details when verbose
pub fn analyze_source(
    source: &dyn PackageSource,
    keep: usize,
    reporter: &Reporter,
) -> Result<Analysis> {
    reporter.detail(format!("Reading packages from {}", source.describe()));
    let listing = source.listing()?;

    let analysis = analyze(&listing, keep)?;
    reporter.detail(format!(
        "Found {} kernel version(s), keeping the newest {}",
        analysis.kernels.len(),
        keep
    ));
    for component in &analysis.ignored {
        reporter.detail(format!(
            "Ignoring {} (build type {})",
            component.name, component.build_type
        ));
    }
    for kernel in &analysis.plan.skipped {
        reporter.warn(format!(
            "Not removing incomplete kernel {}",
            kernel.version()
        ));
    }
    Ok(analysis)
}

/// Result of a full run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub analysis: Analysis,
    pub script_path: PathBuf,
    pub script: String,
}

/// Analyze the installed packages and write the removal script
///
/// Nothing is written when the listing cannot be read or parsed.
pub fn run(
    source: &dyn PackageSource,
    writer: &ScriptWriter,
    keep: usize,
    reporter: &Reporter,
) -> Result<RunSummary> {
    let analysis = analyze_source(source, keep, reporter)?;
    let script = render_script(&analysis.plan.to_delete);

    writer.write(&script)?;
    reporter.detail(format!("Wrote {}", writer.path().display()));

    Ok(RunSummary {
        analysis,
        script_path: writer.path().to_path_buf(),
        script,
    })
}
