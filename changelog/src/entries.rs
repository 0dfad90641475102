//! The entry store: log messages grouped by category plus release metadata.
//!
//! Stores are values. Every transformation returns a new store and leaves the
//! receiver untouched, so a caller can keep the store it started from.

use crate::error::ChangelogError;
use crate::types::{Category, Result, UNRECOGNIZED_CATEGORY, UnreleasedLogs};
use crate::utils::is_release_version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Release metadata attached to a store that is about to be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore {
    categories: BTreeMap<Category, Vec<String>>,
    release: Option<Release>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    /// Creates an unreleased store with every category present and empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            release: None,
        }
    }

    /// Returns a copy with `message` appended to `category`
    #[must_use]
    pub fn with_entry(&self, category: Category, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.categories
            .entry(category)
            .or_default()
            .push(message.into());
        next
    }

    /// Returns a copy carrying release metadata
    #[must_use]
    pub fn with_release(&self, version: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.release = Some(Release {
            version: version.into(),
            timestamp: timestamp.into(),
        });
        next
    }

    /// Returns a copy with recovered unreleased logs appended after the
    /// messages already in the store.
    ///
    /// Buckets whose key is not a known category, including
    /// [`UNRECOGNIZED_CATEGORY`], are dropped.
    #[must_use]
    pub fn with_unreleased_logs(&self, logs: &UnreleasedLogs) -> Self {
        let mut next = self.clone();
        for (key, messages) in logs {
            if key == UNRECOGNIZED_CATEGORY {
                debug!(count = messages.len(), "dropping logs without a category");
                continue;
            }
            match key.parse::<Category>() {
                Ok(category) => next
                    .categories
                    .entry(category)
                    .or_default()
                    .extend(messages.iter().cloned()),
                Err(_) => {
                    debug!(category = %key, count = messages.len(), "dropping logs under unknown category");
                }
            }
        }
        next
    }

    #[must_use]
    pub fn messages(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn release(&self) -> Option<&Release> {
        self.release.as_ref()
    }

    /// Iterates categories in their natural order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.categories
            .iter()
            .map(|(category, messages)| (*category, messages.as_slice()))
    }

    /// Total number of messages across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the store into the indented bulk-edit document
    ///
    /// # Errors
    /// Returns `BulkEdit` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&EntryDocument::from(self))?)
    }

    /// Parses and validates a (possibly hand-edited) bulk-edit document
    ///
    /// # Errors
    /// Returns `BulkEdit` when the text is not a valid document and
    /// `InvalidEntries` when its values are rejected
    pub fn from_json(content: &str) -> Result<Self> {
        let document: EntryDocument = serde_json::from_str(content)?;
        Self::try_from(document)
    }
}

/// Wire shape of the bulk-edit document. Field order is the order keys are
/// written in.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryDocument {
    #[serde(rename = "_release", default)]
    release: String,
    #[serde(rename = "_timestamp", default)]
    timestamp: String,
    #[serde(rename = "Added", default)]
    added: Vec<String>,
    #[serde(rename = "Changed", default)]
    changed: Vec<String>,
    #[serde(rename = "Deprecated", default)]
    deprecated: Vec<String>,
    #[serde(rename = "Removed", default)]
    removed: Vec<String>,
    #[serde(rename = "Fixed", default)]
    fixed: Vec<String>,
    #[serde(rename = "Security", default)]
    security: Vec<String>,
}

impl EntryDocument {
    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Added => &mut self.added,
            Category::Changed => &mut self.changed,
            Category::Deprecated => &mut self.deprecated,
            Category::Removed => &mut self.removed,
            Category::Fixed => &mut self.fixed,
            Category::Security => &mut self.security,
        }
    }
}

impl From<&EntryStore> for EntryDocument {
    fn from(store: &EntryStore) -> Self {
        let mut document = Self::default();
        if let Some(release) = store.release() {
            document.release = release.version.clone();
            document.timestamp = release.timestamp.clone();
        }
        for (category, messages) in store.iter() {
            document.bucket_mut(category).extend(messages.iter().cloned());
        }
        document
    }
}

impl TryFrom<EntryDocument> for EntryStore {
    type Error = ChangelogError;

    fn try_from(mut document: EntryDocument) -> Result<Self> {
        let release = match (document.release.trim(), document.timestamp.trim()) {
            ("", "") => None,
            ("", timestamp) => {
                return Err(ChangelogError::InvalidEntries(format!(
                    "_timestamp '{timestamp}' is set but _release is empty"
                )));
            }
            (version, _) if !is_release_version(version) => {
                return Err(ChangelogError::InvalidEntries(format!(
                    "_release '{version}' is not a MAJOR.MINOR.PATCH version"
                )));
            }
            (version, timestamp) => Some(Release {
                version: version.to_string(),
                timestamp: timestamp.to_string(),
            }),
        };

        let mut store = Self {
            release,
            ..Self::new()
        };
        for category in Category::ALL {
            for message in std::mem::take(document.bucket_mut(category)) {
                let message = message.trim();
                if message.is_empty() {
                    continue;
                }
                if message.contains('\n') {
                    return Err(ChangelogError::InvalidEntries(format!(
                        "{category} message spans multiple lines: {message:?}"
                    )));
                }
                store
                    .categories
                    .entry(category)
                    .or_default()
                    .push(message.to_string());
            }
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> EntryStore {
        EntryStore::new()
            .with_entry(Category::Added, "Added existing")
            .with_entry(Category::Changed, "Changes existing")
    }

    #[test]
    fn new_store_has_every_category() {
        let store = EntryStore::new();
        let categories: Vec<Category> = store.iter().map(|(category, _)| category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert!(store.is_empty());
        assert!(store.release().is_none());
    }

    #[test]
    fn transformations_leave_the_original_untouched() {
        let original = sample_store();
        let changed = original
            .with_entry(Category::Fixed, "A fix")
            .with_release("1.0.1", "2024-01-01 10:00:00");

        assert!(original.messages(Category::Fixed).is_empty());
        assert!(original.release().is_none());
        assert_eq!(changed.messages(Category::Fixed), ["A fix"]);
        assert_eq!(changed.release().unwrap().version, "1.0.1");
    }

    #[test]
    fn unreleased_logs_are_appended_after_existing_entries() {
        let logs = UnreleasedLogs::from([
            (
                "Added".to_string(),
                vec!["New 1".to_string(), "New 2".to_string(), "New 3".to_string()],
            ),
            ("Changed".to_string(), vec!["Different 1".to_string()]),
            ("Removed".to_string(), vec!["Old 1".to_string()]),
        ]);

        let merged = sample_store().with_unreleased_logs(&logs);

        assert_eq!(
            merged.messages(Category::Added),
            ["Added existing", "New 1", "New 2", "New 3"]
        );
        assert_eq!(
            merged.messages(Category::Changed),
            ["Changes existing", "Different 1"]
        );
        assert_eq!(merged.messages(Category::Removed), ["Old 1"]);
    }

    #[test]
    fn unrecognized_buckets_are_dropped() {
        let logs = UnreleasedLogs::from([
            (UNRECOGNIZED_CATEGORY.to_string(), vec!["orphan".to_string()]),
            ("Misc".to_string(), vec!["stray".to_string()]),
        ]);

        let merged = EntryStore::new().with_unreleased_logs(&logs);

        assert!(merged.is_empty());
    }

    #[test]
    fn bulk_edit_document_lists_reserved_keys_first() {
        let json = sample_store().to_json().unwrap();
        let release_at = json.find("\"_release\"").unwrap();
        let timestamp_at = json.find("\"_timestamp\"").unwrap();
        let added_at = json.find("\"Added\"").unwrap();
        let security_at = json.find("\"Security\"").unwrap();
        assert!(release_at < timestamp_at);
        assert!(timestamp_at < added_at);
        assert!(added_at < security_at);

        assert_eq!(EntryStore::from_json(&json).unwrap(), sample_store());
    }

    #[test]
    fn hand_edited_document_with_missing_keys_is_accepted() {
        let store = EntryStore::from_json(r#"{ "Fixed": ["  Crash on start  ", ""] }"#).unwrap();
        assert_eq!(store.messages(Category::Fixed), ["Crash on start"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupted_json_is_reported_as_bulk_edit_error() {
        let err = EntryStore::from_json(r#"{ "Added": ["oops", }"#).unwrap_err();
        assert!(matches!(err, ChangelogError::BulkEdit(_)));
        assert!(err.is_corrupted_entries());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EntryStore::from_json(r#"{ "Misc": ["x"] }"#).unwrap_err();
        assert!(matches!(err, ChangelogError::BulkEdit(_)));
    }

    #[test]
    fn invalid_release_is_rejected() {
        let err = EntryStore::from_json(r#"{ "_release": "1.0", "_timestamp": "now" }"#)
            .unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidEntries(_)));

        let err = EntryStore::from_json(r#"{ "_timestamp": "now" }"#).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidEntries(_)));
    }

    #[test]
    fn multi_line_messages_are_rejected() {
        let err = EntryStore::from_json(r#"{ "Added": ["one\ntwo"] }"#).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidEntries(_)));
    }
}
