use thiserror::Error;

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// The bulk-edit document is not valid JSON or has the wrong shape
    #[error("Bulk edit document is corrupted: {0}")]
    BulkEdit(#[from] serde_json::Error),

    /// The bulk-edit document parsed but holds values the store rejects
    #[error("Invalid entries: {0}")]
    InvalidEntries(String),

    #[error("Unknown log category: {0}")]
    UnknownCategory(String),

    #[error("{0}")]
    Other(String),
}

impl ChangelogError {
    /// True when the error came from hand-edited entries rather than from code
    #[must_use]
    pub fn is_corrupted_entries(&self) -> bool {
        matches!(self, Self::BulkEdit(_) | Self::InvalidEntries(_))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::BulkEdit(e) => format!("Bulk edit file could not be read back: {e}"),
            Self::InvalidEntries(msg) => format!("Bulk edit file has invalid entries: {msg}"),
            Self::UnknownCategory(cat) => format!("Did not match any known log type: {cat}"),
            Self::Other(msg) => msg.clone(),
        }
    }
}
