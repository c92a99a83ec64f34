//! Script command implementation

use console::Style;

use crate::cli::ScriptArgs;
use crate::error::Result;
use crate::operations;
use crate::script::ScriptWriter;

use super::helpers::Session;

/// Run script command
pub fn run(session: &Session, args: ScriptArgs) -> Result<()> {
    let keep = session.keep(args.keep);
    let path = session.config.output_path(args.output)?;
    let writer = ScriptWriter::new(path);

    let summary = operations::run(session.source.as_ref(), &writer, keep, &session.reporter)?;

    session.reporter.detail(format!(
        "{} removal command(s)",
        summary.script.lines().count()
    ));

    if args.print_path {
        println!("{}", summary.script_path.display());
        return Ok(());
    }

    let removed = &summary.analysis.plan.to_delete;
    if removed.is_empty() {
        println!("No kernels to remove.");
    } else {
        let versions: Vec<String> = removed.iter().map(|k| k.version().to_string()).collect();
        println!(
            "{} {} kernel(s): {}",
            Style::new().bold().apply_to("Removing"),
            removed.len(),
            versions.join(", ")
        );
    }
    println!(
        "Script written to {}",
        Style::new().cyan().apply_to(summary.script_path.display())
    );

    Ok(())
}
