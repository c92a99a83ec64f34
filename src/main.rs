//! remok - old kernel removal planner
//!
//! Groups the installed Linux kernel packages of a Debian-based system by
//! version, keeps the most recent kernels, and writes an `apt purge` script for
//! the complete older ones. It never removes packages itself.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod operations;
mod parser;
mod policy;
mod script;
mod source;
mod ui;

use cli::{Cli, Commands};
use commands::helpers::Session;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        listing,
        verbose,
        command,
    } = cli;
    // Version and completions work without a configuration
    let session = move || Session::open(config, listing, verbose);

    match command {
        Commands::Plan(args) => commands::plan::run(&session()?, args),
        Commands::List(args) => commands::list::run(&session()?, args),
        Commands::Script(args) => commands::script::run(&session()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
