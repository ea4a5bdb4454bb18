use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use dl_compiler::Header;
use dl_core::{FeatureFlag, Target};

#[derive(Parser, Debug)]
#[command(name = "dl-cli")]
#[command(about = "Compile JSON deny lists into uBlock Origin and uBlacklist lists")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a deny list into a target list format
    #[command(disable_help_flag = true)]
    Compile(CompileArgs),

    /// Check that a deny list parses
    Check {
        /// Deny list JSON file
        #[arg(short, long, visible_alias = "in")]
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Deny list JSON file
    #[arg(short, long, visible_alias = "in")]
    pub input: PathBuf,

    /// Output list file (overwritten)
    #[arg(short, long, visible_alias = "out")]
    pub output: PathBuf,

    /// Output format: uBlockOrigin or uBlacklist
    #[arg(short, long)]
    pub target: Target,

    /// Activate a feature flag: GoogleSearchPrefix, GoogleSearchFuzzy (Base is always on)
    #[arg(short = 'f', long = "feature-flag", alias = "feature")]
    pub feature_flags: Vec<FeatureFlag>,

    /// Comment line placed above the rules, verbatim
    #[arg(short = 'h', long = "header")]
    pub headers: Vec<String>,

    /// Header attribute in KEY=VALUE form, written as "KEY: VALUE"
    #[arg(short = 'a', long = "attribute")]
    pub attributes: Vec<Header>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl CompileArgs {
    /// Free-text headers first, then attributes, each in command-line order.
    pub fn all_headers(&self) -> Vec<Header> {
        self.headers
            .iter()
            .cloned()
            .map(Header::Text)
            .chain(self.attributes.iter().cloned())
            .collect()
    }
}
