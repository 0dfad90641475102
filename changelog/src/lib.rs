//! Changelog text model.
//!
//! Reads the unreleased part of an existing changelog, renders an
//! [`EntryStore`] as markdown and stitches the result onto the released
//! history of the old document. Everything here is pure: no I/O, no state
//! shared between calls.

pub mod cleaner;
pub mod config;
pub mod entries;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod pipeline;
pub mod position;
pub mod release;
pub mod types;
pub mod utils;

pub use crate::cleaner::MarkdownCleaner;
pub use crate::config::{ChangelogConfig, MarkdownPatterns};
pub use crate::entries::{EntryStore, Release};
pub use crate::error::ChangelogError;
pub use crate::formatter::MarkdownGenerator;
pub use crate::parser::Parser;
pub use crate::pipeline::{Changelog, RebuildOutcome, merge_strings};
pub use crate::release::{DEFAULT_TIMESTAMP_FORMAT, current_timestamp, stamp_release};
pub use crate::types::{Category, Result, UNRECOGNIZED_CATEGORY, UnreleasedLogs};
pub use crate::utils::is_release_version;

/// Unreleased logs of `content`, using the default patterns
pub fn identify_unreleased_logs(content: &str) -> UnreleasedLogs {
    Parser::default().identify_unreleased_logs(content)
}

/// Markdown for `entries`, using the default tag and patterns
pub fn generate_markdown_for_entries(entries: &EntryStore) -> String {
    MarkdownGenerator::default().generate(entries)
}

/// Released history of `content`, using the default tag and patterns
pub fn clean_up_existing_markdown(content: &str) -> String {
    MarkdownCleaner::default().clean_up_existing_markdown(content)
}
