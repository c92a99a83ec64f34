//! Plan command implementation
//!
//! Shows which kernels are kept, removed, and left alone, without writing
//! anything.

use console::Style;

use crate::cli::PlanArgs;
use crate::error::Result;
use crate::script::render_script;
use crate::ui::display::{Decision, display_group};

use super::helpers::Session;

/// Run plan command
pub fn run(session: &Session, args: PlanArgs) -> Result<()> {
    let keep = session.keep(args.keep);
    let analysis = session.analyze(keep)?;
    let plan = &analysis.plan;

    if analysis.kernels.is_empty() {
        println!("No kernel packages found.");
        return Ok(());
    }

    display_group("Keep", &plan.to_save, Decision::Keep);
    println!();
    display_group("Delete", &plan.to_delete, Decision::Delete);
    if !plan.skipped.is_empty() {
        println!();
        display_group("Skip (incomplete)", &plan.skipped, Decision::Skip);
    }

    if args.commands && !plan.to_delete.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Commands:"));
        print!("{}", render_script(&plan.to_delete));
    }

    if !plan.to_delete.is_empty() && !args.commands {
        println!();
        println!("Run 'remok script' to write the removal script.");
    }

    Ok(())
}
