//! Target list renderers.
//!
//! Each target is a small stateless type implementing [`Render`]. The
//! [`Renderer`] enum selects one per run from the compile options.

mod google;
mod ublacklist;
mod ublock;

pub use google::google_search_rules;
pub use ublacklist::UBlacklist;
pub use ublock::UBlockOrigin;

use dl_core::{Entry, Target};

use crate::header::Header;
use crate::options::{CompileOptions, GoogleSearchMode};

/// Serializes filtered entries into one list dialect.
pub trait Render {
    /// Leading character of a comment line.
    fn comment_marker(&self) -> char;

    /// Append the rule line(s) for one entry, newline-terminated.
    fn write_entry(&self, entry: &Entry, out: &mut String);

    /// Append lines that follow the rule block.
    fn write_trailer(&self, _entries: &[&Entry], _out: &mut String) {}

    /// Headers first, then one rule per entry in the given order.
    fn render(&self, entries: &[&Entry], headers: &[Header]) -> String {
        let mut out = String::new();
        let marker = self.comment_marker();
        for header in headers {
            header.write_to(marker, &mut out);
        }
        for entry in entries {
            self.write_entry(entry, &mut out);
        }
        self.write_trailer(entries, &mut out);
        out
    }
}

/// Renderer chosen by `--target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    UBlockOrigin(UBlockOrigin),
    UBlacklist(UBlacklist),
}

impl Renderer {
    pub fn for_target(target: Target, google_search: Option<GoogleSearchMode>) -> Self {
        match target {
            Target::UBlockOrigin => Self::UBlockOrigin(UBlockOrigin { google_search }),
            Target::UBlacklist => Self::UBlacklist(UBlacklist),
        }
    }

    pub fn from_options(options: &CompileOptions) -> Self {
        Self::for_target(options.target, options.google_search())
    }

    fn inner(&self) -> &dyn Render {
        match self {
            Self::UBlockOrigin(r) => r,
            Self::UBlacklist(r) => r,
        }
    }
}

impl Render for Renderer {
    fn comment_marker(&self) -> char {
        self.inner().comment_marker()
    }

    fn write_entry(&self, entry: &Entry, out: &mut String) {
        self.inner().write_entry(entry, out)
    }

    fn write_trailer(&self, entries: &[&Entry], out: &mut String) {
        self.inner().write_trailer(entries, out)
    }
}

/// Scheme of a full URL, or `None` for a host + path fragment.
///
/// Only a leading `scheme://` counts; a URL embedded later in a fragment
/// (e.g. in a query string) does not.
pub(crate) fn url_scheme(value: &str) -> Option<&str> {
    let (scheme, _) = value.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
    {
        Some(scheme)
    } else {
        None
    }
}
