use crate::entries::EntryStore;
use crate::error::ChangelogError;
use crate::types::Result;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time rendered with a strftime-style `format`
///
/// # Errors
/// Returns an error if `format` contains an invalid specifier
pub fn current_timestamp(format: &str) -> Result<String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ChangelogError::Other(format!(
            "Invalid timestamp format: {format}"
        )));
    }
    Ok(Local::now().format(format).to_string())
}

/// Returns a copy of `entries` stamped as release `version`, made now
///
/// # Errors
/// Returns an error if `format` is not a valid timestamp format
pub fn stamp_release(entries: &EntryStore, version: &str, format: &str) -> Result<EntryStore> {
    let timestamp = current_timestamp(format)?;
    Ok(entries.with_release(version, timestamp))
}
