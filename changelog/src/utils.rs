use once_cell::sync::Lazy;
use regex::Regex;

/// Level-2 heading of an already released version, e.g. `## [1.2.3] - ...`
pub static RELEASE_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s+\[\d+\.\d+\.\d+\]").expect("Failed to compile release heading regex")
});

pub static CATEGORY_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###").expect("Failed to compile category heading regex"));

pub static LIST_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\s+").expect("Failed to compile list item regex"));

/// A bare release version as accepted on the command line and in the store
pub static RELEASE_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+$").expect("Failed to compile release version regex")
});

/// Whether `version` is a bare `MAJOR.MINOR.PATCH` release version
pub fn is_release_version(version: &str) -> bool {
    RELEASE_VERSION_PATTERN.is_match(version)
}

pub static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

pub const LINE_DELIMITER: &str = "\n";

pub const UNRELEASED_TAG: &str = "[Unreleased]";
