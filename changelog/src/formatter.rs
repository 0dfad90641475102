use crate::config::ChangelogConfig;
use crate::entries::EntryStore;
use tracing::debug;

const LIST_ITEM: &str = "* ";
const H3_HEADER: &str = "### ";
const H2_HEADER: &str = "## ";

/// Renders an entry store as the top section of a changelog
#[derive(Debug, Clone)]
pub struct MarkdownGenerator {
    config: ChangelogConfig,
}

impl Default for MarkdownGenerator {
    fn default() -> Self {
        Self::new(ChangelogConfig::default())
    }
}

impl MarkdownGenerator {
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Produces the level-2 heading followed by one `###` block per non-empty
    /// category.
    ///
    /// Lines are collected bottom-up and reversed once at the end, so
    /// categories come out in reverse natural order while each block keeps
    /// its messages in insertion order.
    pub fn generate(&self, entries: &EntryStore) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(entries.len() + 8);

        for (category, messages) in entries.iter() {
            if messages.is_empty() {
                continue;
            }
            lines.extend(
                messages
                    .iter()
                    .rev()
                    .map(|message| format!("{LIST_ITEM}{message}")),
            );
            lines.push(format!("{H3_HEADER}{category}"));
        }
        lines.push(self.section_heading(entries));

        lines.reverse();
        let markdown = lines.join(self.config.delimiter.as_str());
        debug!(
            lines = lines.len(),
            output_len = markdown.len(),
            "markdown generated for entries"
        );
        markdown
    }

    fn section_heading(&self, entries: &EntryStore) -> String {
        match entries.release() {
            Some(release) if self.config.patterns.release_version.is_match(&release.version) => {
                format!("{H2_HEADER}[{}] - {}", release.version, release.timestamp)
            }
            _ => format!("{H2_HEADER}{}", self.config.unreleased_tag),
        }
    }
}
