//! Deny-list Core Library
//!
//! This crate holds the rule model shared by the compiler and the CLI.
//!
//! # Architecture
//!
//! A deny list is a JSON array of entries. Each entry blocks either a whole
//! domain or a single path, and may be gated behind a feature flag so that a
//! single source list can produce several outputs.
//!
//! # Modules
//!
//! - `types`: Entries, match methods, feature flags and compile targets
//! - `entry`: JSON decoding of the entry array
//! - `error`: Error types

pub mod entry;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use entry::parse_entries;
pub use error::{EntryError, UnknownNameError};
pub use types::{Entry, EntryFeature, FeatureFlag, FeatureSet, MatchMethod, Target};
