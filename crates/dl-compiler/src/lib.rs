//! Deny-list Compiler
//!
//! This crate turns decoded deny-list entries into uBlock Origin filter
//! lists and uBlacklist subscriptions.

pub mod compile;
pub mod filter;
pub mod header;
pub mod options;
pub mod reader;
pub mod render;

pub use compile::{compile_list, CompileError, CompileStats, CompiledList};
pub use filter::filter_entries;
pub use header::Header;
pub use options::{CompileOptions, GoogleSearchMode, OptionsError};
pub use reader::read_list;
pub use render::{Render, Renderer};
