use crate::cleaner::MarkdownCleaner;
use crate::config::ChangelogConfig;
use crate::entries::EntryStore;
use crate::formatter::MarkdownGenerator;
use crate::parser::Parser;
use crate::types::{Category, UnreleasedLogs};
use tracing::{debug, info};

/// Joins freshly generated markdown and the cleaned remainder, new first
pub fn merge_strings(new_markdown: &str, old_markdown: &str, delimiter: &str) -> String {
    [new_markdown, old_markdown].join(delimiter)
}

/// Result of rebuilding a changelog document
#[derive(Debug, Clone)]
pub struct RebuildOutcome {
    /// The complete document to persist
    pub markdown: String,
    /// Entries after folding in the unreleased logs found in the document
    pub entries: EntryStore,
    /// Unreleased logs that could not be attributed to a known category.
    /// They are not part of `markdown`.
    pub dropped: UnreleasedLogs,
}

impl RebuildOutcome {
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped.values().map(Vec::len).sum()
    }
}

/// Text-in, text-out changelog pipeline
#[derive(Debug, Clone)]
pub struct Changelog {
    config: ChangelogConfig,
    parser: Parser,
    generator: MarkdownGenerator,
    cleaner: MarkdownCleaner,
}

impl Default for Changelog {
    fn default() -> Self {
        Self::new(ChangelogConfig::default())
    }
}

impl Changelog {
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            parser: Parser::new(config.clone()),
            generator: MarkdownGenerator::new(config.clone()),
            cleaner: MarkdownCleaner::new(config.clone()),
            config,
        }
    }

    /// Folds the unreleased logs of `existing` into `entries`, renders them as
    /// the new top section and puts the released history of `existing`
    /// underneath.
    ///
    /// `existing` must be one consistent snapshot of the document; all four
    /// steps read that same text.
    pub fn rebuild(&self, existing: &str, entries: &EntryStore) -> RebuildOutcome {
        let unreleased = self.parser.identify_unreleased_logs(existing);
        let entries = entries.with_unreleased_logs(&unreleased);
        let dropped: UnreleasedLogs = unreleased
            .into_iter()
            .filter(|(key, _)| key.parse::<Category>().is_err())
            .collect();

        let generated = self.generator.generate(&entries);
        let released = self.cleaner.clean_up_existing_markdown(existing);
        let markdown = merge_strings(&generated, &released, &self.config.delimiter);

        info!(
            entries = entries.len(),
            released_len = released.len(),
            "changelog rebuilt"
        );
        if !dropped.is_empty() {
            debug!(buckets = ?dropped.keys().collect::<Vec<_>>(), "unreleased logs dropped");
        }

        RebuildOutcome {
            markdown,
            entries,
            dropped,
        }
    }
}
