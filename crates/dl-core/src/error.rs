//! Error types for the rule model.

/// Error type for decoding an entry list.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Expected a JSON array of entries, found {found}")]
    NotAnArray { found: &'static str },
    #[error("Invalid entry at index {index}: {message}")]
    Schema { index: usize, message: String },
}

/// A name that does not match any variant of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{name}' (expected one of: {expected})")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}
