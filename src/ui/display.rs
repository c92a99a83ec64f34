//! Display functions for kernels and retention plans

use console::Style;
use serde::Serialize;

use crate::domain::{ComponentKind, Flavor, Kernel, KernelVersion, SubKernel};
use crate::policy::RetentionPlan;

/// What the retention policy does with a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Keep,
    Delete,
    Skip,
}

impl Decision {
    fn styled_label(self) -> String {
        match self {
            Decision::Keep => Style::new().green().bold().apply_to("keep").to_string(),
            Decision::Delete => Style::new().red().bold().apply_to("delete").to_string(),
            Decision::Skip => Style::new().yellow().bold().apply_to("skip").to_string(),
        }
    }
}

/// Serializable view of one kernel for `list --json`
#[derive(Debug, Clone, Serialize)]
pub struct KernelReport {
    pub version: KernelVersion,
    pub complete: bool,
    pub decision: Decision,
    pub packages: Vec<String>,
    pub missing: Vec<MissingComponent>,
}

/// A required package that is not installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingComponent {
    pub flavor: Flavor,
    pub kind: ComponentKind,
}

impl KernelReport {
    pub fn new(kernel: &Kernel, decision: Decision) -> Self {
        let packages = [kernel.base(), kernel.generic()]
            .into_iter()
            .flat_map(|sub| ComponentKind::ALL.into_iter().filter_map(move |k| sub.slot(k)))
            .map(str::to_string)
            .collect();

        Self {
            version: kernel.version(),
            complete: kernel.is_complete(),
            decision,
            packages,
            missing: missing_components(kernel),
        }
    }
}

fn missing_components(kernel: &Kernel) -> Vec<MissingComponent> {
    let missing_in = |sub: &SubKernel| -> Vec<MissingComponent> {
        sub.missing()
            .into_iter()
            .map(|kind| MissingComponent {
                flavor: sub.flavor(),
                kind,
            })
            .collect()
    };
    let mut missing = missing_in(kernel.base());
    missing.extend(missing_in(kernel.generic()));
    missing
}

/// Every kernel of a plan with its decision, ascending by version
pub fn plan_reports(plan: &RetentionPlan) -> Vec<KernelReport> {
    let mut reports: Vec<KernelReport> = plan
        .to_save
        .iter()
        .map(|k| KernelReport::new(k, Decision::Keep))
        .chain(plan.to_delete.iter().map(|k| KernelReport::new(k, Decision::Delete)))
        .chain(plan.skipped.iter().map(|k| KernelReport::new(k, Decision::Skip)))
        .collect();
    reports.sort_by_key(|report| report.version);
    reports
}

/// Display one kernel line, with packages and missing parts when detailed
pub fn display_kernel(report: &KernelReport, detailed: bool) {
    let state = if report.complete {
        Style::new().green().apply_to("complete")
    } else {
        Style::new().yellow().apply_to("incomplete")
    };
    println!(
        "  {:<8} {} ({})",
        report.decision.styled_label(),
        Style::new().bold().apply_to(report.version),
        state
    );

    if !report.missing.is_empty() {
        let missing: Vec<String> = report
            .missing
            .iter()
            .map(|m| format!("{} {}", m.flavor, m.kind))
            .collect();
        println!(
            "           {} {}",
            Style::new().bold().apply_to("Missing:"),
            missing.join(", ")
        );
    }

    if detailed {
        for package in &report.packages {
            println!("           {}", Style::new().cyan().apply_to(package));
        }
    }
}

/// Display a titled group of kernels
pub fn display_group(title: &str, kernels: &[Kernel], decision: Decision) {
    println!(
        "{} ({}):",
        Style::new().bold().apply_to(title),
        kernels.len()
    );
    if kernels.is_empty() {
        println!("  {}", Style::new().dim().apply_to("none"));
    }
    for kernel in kernels {
        display_kernel(&KernelReport::new(kernel, decision), false);
    }
}
