use clap::Parser;
use std::path::PathBuf;

/// Arguments for the script command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the script to the configured location:\n    remok script\n\n\
                  Write the script to a given file:\n    remok script --output /tmp/kernel_remove\n\n\
                  Run the generated script:\n    sudo sh \"$(remok script --print-path)\"")]
pub struct ScriptArgs {
    /// Script path (overrides REMOK_OUTPUT and the configuration)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Number of most recent kernels to keep (overrides the configuration)
    #[arg(long, short = 'k', value_parser = clap::value_parser!(u16).range(1..))]
    pub keep: Option<u16>,

    /// Only print the script path after writing it
    #[arg(long)]
    pub print_path: bool,
}
