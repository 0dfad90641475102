//! Reading and writing the changelog file on disk.

use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{Changelog, EntryStore, RebuildOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The changelog file of a project
#[derive(Debug, Clone)]
pub struct ChangelogDocument {
    path: PathBuf,
}

impl ChangelogDocument {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty file if it does not exist yet. Returns whether it
    /// was created.
    pub fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        fs::write(&self.path, "")
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        info!(path = %self.path.display(), "changelog created");
        Ok(true)
    }

    /// Whole content of the file, read once so every step sees the same text
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    pub fn write(&self, markdown: &str) -> Result<()> {
        fs::write(&self.path, markdown)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Rebuilds the changelog of `settings` with `entries` on top and writes it
pub fn build_the_changelog(settings: &Settings, entries: &EntryStore) -> Result<RebuildOutcome> {
    let mut progress = ProgressTracker::new("Building CHANGELOG").with_steps(&[
        "Reading changelog",
        "Merging unreleased logs",
        "Writing changelog",
    ]);
    let document = ChangelogDocument::new(&settings.changelog_path);

    progress.start_step();
    let created = document.initialize()?;
    let existing = document.read()?;
    progress.complete_step_with(if created { "created" } else { "existing" });

    progress.start_step();
    let outcome = Changelog::default().rebuild(&existing, entries);
    progress.complete_step_with(&format!("{} entries", outcome.entries.len()));
    if outcome.dropped_count() > 0 {
        ui::warning_message(&format!(
            "{} unreleased log(s) without a known category were dropped",
            outcome.dropped_count()
        ));
    }

    progress.start_step();
    document.write(&outcome.markdown)?;
    progress.complete_step();

    debug!(path = %document.path().display(), len = outcome.markdown.len(), "changelog written");
    if settings.verbose {
        ui::entry_summary(&outcome.entries);
        ui::markdown_preview(&top_section(&outcome.markdown));
    }
    progress.complete();
    ui::success_message("Successfully built the CHANGELOG");
    Ok(outcome)
}

/// Lines of the freshly generated section, up to the next level-2 heading
fn top_section(markdown: &str) -> String {
    markdown
        .lines()
        .enumerate()
        .take_while(|(idx, line)| *idx == 0 || !line.starts_with("## "))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}
