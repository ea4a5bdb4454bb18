use std::io;
use std::path::{Path, PathBuf};

use dl_compiler::{compile_list, CompileError, CompileOptions, OptionsError};
use dl_core::{parse_entries, Entry, EntryError, EntryFeature, FeatureSet};

use crate::cli::CompileArgs;
use crate::output::{read_input, write_output};

/// Error type for CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    Usage(#[from] OptionsError),
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid deny list '{}': {source}", .path.display())]
    Entries {
        path: PathBuf,
        #[source]
        source: EntryError,
    },
    #[error("{0}")]
    Compile(CompileError),
}

impl From<CompileError> for CliError {
    fn from(e: CompileError) -> Self {
        match e {
            CompileError::Options(e) => Self::Usage(e),
            other => Self::Compile(other),
        }
    }
}

impl CliError {
    /// Usage errors share clap's exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub fn cmd_compile(args: &CompileArgs) -> Result<(), CliError> {
    let options = CompileOptions {
        target: args.target,
        features: FeatureSet::with_flags(args.feature_flags.iter().copied()),
        headers: args.all_headers(),
    };
    // Settings are checked before touching any file
    options.validate()?;

    let entries = load_entries(&args.input)?;
    log::info!("loaded {} entries from '{}'", entries.len(), args.input.display());

    let compiled = compile_list(&entries, &options)?;
    write_output(&args.output, &compiled.text)?;

    let stats = &compiled.stats;
    println!(
        "Compiled '{}' to '{}' ({})",
        args.input.display(),
        args.output.display(),
        options.target
    );
    println!("  Entries:  {} -> {} (feature filter removed {})",
        stats.entries_in,
        stats.entries_kept,
        stats.entries_in - stats.entries_kept,
    );
    println!("  Headers:  {}", stats.header_lines);
    if stats.cosmetic_rules > 0 {
        println!("  Cosmetic: {}", stats.cosmetic_rules);
    }
    println!("  Size:     {} bytes", stats.bytes);

    Ok(())
}

pub fn cmd_check(input: &Path) -> Result<(), CliError> {
    let entries = load_entries(input)?;
    let summary = summarize(&entries);

    println!("Deny list '{}' is valid", input.display());
    println!("  Entries:  {}", entries.len());
    println!("  Domains:  {}", summary.domains);
    println!("  Paths:    {}", summary.paths);
    for (feature, count) in &summary.features {
        println!("  Feature {feature}: {count}");
    }

    Ok(())
}

fn load_entries(path: &Path) -> Result<Vec<Entry>, CliError> {
    let json = read_input(path)?;
    parse_entries(&json).map_err(|source| CliError::Entries {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct EntrySummary {
    domains: usize,
    paths: usize,
    /// Entry count per feature tag, in first-seen order
    features: Vec<(String, usize)>,
}

fn summarize(entries: &[Entry]) -> EntrySummary {
    let mut summary = EntrySummary::default();

    for entry in entries {
        if entry.is_domain() {
            summary.domains += 1;
        } else {
            summary.paths += 1;
        }

        let name = match entry.feature() {
            EntryFeature::Known(flag) => flag.as_str().to_string(),
            EntryFeature::Unrecognized(name) => format!("{name} (unrecognized)"),
        };
        match summary.features.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => summary.features.push((name, 1)),
        }
    }

    summary
}
