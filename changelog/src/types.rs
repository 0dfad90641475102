use crate::error::ChangelogError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Unreleased log messages recovered from a document, keyed by the raw
/// heading word they were found under
pub type UnreleasedLogs = HashMap<String, Vec<String>>;

/// Bucket for list items that appear before any category heading, or under a
/// heading with no category word. Never merged back into an [`EntryStore`].
///
/// [`EntryStore`]: crate::entries::EntryStore
pub const UNRECOGNIZED_CATEGORY: &str = "NA";

/// Kinds of change a log message can describe, in their natural order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ChangelogError::UnknownCategory(s.to_string()))
    }
}
