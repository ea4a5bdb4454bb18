use dl_core::Entry;

use crate::filter::filter_entries;
use crate::header::header_line_count;
use crate::options::{CompileOptions, OptionsError};
use crate::reader::read_list;
use crate::render::{Render, Renderer};

/// Error type for a compile run.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("Rendered list failed validation: expected {expected} rules, read back {found}")]
    SelfCheck { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStats {
    pub entries_in: usize,
    pub entries_kept: usize,
    pub header_lines: usize,
    pub cosmetic_rules: usize,
    pub bytes: usize,
}

/// Rendered list text plus counters for reporting.
#[derive(Debug, Clone)]
pub struct CompiledList {
    pub text: String,
    pub stats: CompileStats,
}

/// Filter and render `entries`, then read the text back to make sure every
/// kept entry survived as exactly one network rule.
pub fn compile_list(entries: &[Entry], options: &CompileOptions) -> Result<CompiledList, CompileError> {
    options.validate()?;

    let kept = filter_entries(entries, options.features);
    log::info!(
        "kept {} of {} entries for features [{}]",
        kept.len(),
        entries.len(),
        options.features.flags().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
    );

    let renderer = Renderer::from_options(options);
    let text = renderer.render(&kept, &options.headers);

    let found = read_list(options.target, &text).len();
    if found != kept.len() {
        return Err(CompileError::SelfCheck {
            expected: kept.len(),
            found,
        });
    }

    let cosmetic_rules = if options.google_search().is_some() {
        kept.len() * 2
    } else {
        0
    };

    let stats = CompileStats {
        entries_in: entries.len(),
        entries_kept: kept.len(),
        header_lines: header_line_count(&options.headers),
        cosmetic_rules,
        bytes: text.len(),
    };
    log::debug!("rendered {} bytes for {}", stats.bytes, options.target);

    Ok(CompiledList { text, stats })
}
