//! List command implementation
//!
//! This command lists every installed kernel version with its completeness
//! and what the retention policy would do with it.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::display::{display_kernel, plan_reports};

use super::helpers::Session;

/// Run list command
pub fn run(session: &Session, args: ListArgs) -> Result<()> {
    let keep = session.keep(args.keep);
    let analysis = session.analyze(keep)?;
    let reports = plan_reports(&analysis.plan);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No kernel packages found.");
        return Ok(());
    }

    println!("Installed kernels ({}):", reports.len());
    println!();
    for report in &reports {
        display_kernel(report, args.detailed);
    }
    if !analysis.ignored.is_empty() {
        println!();
        println!(
            "{} package(s) with an unknown flavor were ignored (use -v to list them).",
            analysis.ignored.len()
        );
    }

    Ok(())
}
