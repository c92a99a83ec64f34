use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed kernels:\n    remok list\n\n\
                  Show the packages of each kernel:\n    remok list --detailed\n\n\
                  Machine readable output:\n    remok list --json")]
pub struct ListArgs {
    /// Show the packages of each kernel
    #[arg(long)]
    pub detailed: bool,

    /// Print kernels as JSON
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,

    /// Number of most recent kernels to keep (overrides the configuration)
    #[arg(long, short = 'k', value_parser = clap::value_parser!(u16).range(1..))]
    pub keep: Option<u16>,
}
