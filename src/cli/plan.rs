use clap::Parser;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the plan for installed kernels:\n    remok plan\n\n\
                  Keep the three most recent kernels:\n    remok plan --keep 3\n\n\
                  Show the removal commands too:\n    remok plan --commands")]
pub struct PlanArgs {
    /// Number of most recent kernels to keep (overrides the configuration)
    #[arg(long, short = 'k', value_parser = clap::value_parser!(u16).range(1..))]
    pub keep: Option<u16>,

    /// Print the removal commands after the plan
    #[arg(long)]
    pub commands: bool,
}
