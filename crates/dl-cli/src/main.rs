//! Deny-list compiler CLI
//!
//! Compiles a JSON deny list into a uBlock Origin filter list or a
//! uBlacklist subscription.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod output;

use crate::cli::{Cli, Commands};
use crate::commands::{cmd_check, cmd_compile};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Compile(args) => cmd_compile(args),
        Commands::Check { input } => cmd_check(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
