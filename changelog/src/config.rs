use crate::utils::{
    CATEGORY_HEADING_PATTERN, LINE_DELIMITER, LIST_ITEM_PATTERN, RELEASE_HEADING_PATTERN,
    RELEASE_VERSION_PATTERN, UNRELEASED_TAG,
};
use regex::Regex;

/// Line patterns that make up the markdown subset this crate understands
#[derive(Debug, Clone)]
pub struct MarkdownPatterns {
    pub release_heading: Regex,
    pub category_heading: Regex,
    pub list_item: Regex,
    pub release_version: Regex,
}

impl Default for MarkdownPatterns {
    fn default() -> Self {
        Self {
            release_heading: RELEASE_HEADING_PATTERN.clone(),
            category_heading: CATEGORY_HEADING_PATTERN.clone(),
            list_item: LIST_ITEM_PATTERN.clone(),
            release_version: RELEASE_VERSION_PATTERN.clone(),
        }
    }
}

/// Configuration options for changelog parsing and rendering
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub unreleased_tag: String,
    pub delimiter: String,
    pub patterns: MarkdownPatterns,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            unreleased_tag: UNRELEASED_TAG.to_string(),
            delimiter: LINE_DELIMITER.to_string(),
            patterns: MarkdownPatterns::default(),
        }
    }
}
