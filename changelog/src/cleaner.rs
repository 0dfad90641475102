use crate::config::ChangelogConfig;
use crate::position::find_first_release_position;
use tracing::debug;

/// Strips the unreleased section from an existing changelog document
#[derive(Debug, Clone, Default)]
pub struct MarkdownCleaner {
    config: ChangelogConfig,
}

impl MarkdownCleaner {
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Returns only the released history of `content`: everything from the
    /// first release heading on, without the unreleased tag line and without
    /// empty lines. A document with no release heading cleans to `""`.
    pub fn clean_up_existing_markdown(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        let released = self.remove_unreleased_logs(content);
        self.remove_unreleased_tag(&released)
    }

    fn remove_unreleased_logs(&self, content: &str) -> String {
        let delimiter = self.config.delimiter.as_str();
        let lines: Vec<&str> = content.split(delimiter).collect();

        match find_first_release_position(&lines, &self.config.patterns.release_heading) {
            Some(idx) => {
                debug!(dropped_lines = idx, "unreleased section removed");
                lines[idx..].join(delimiter)
            }
            None => {
                debug!(dropped_lines = lines.len(), "no released history found");
                String::new()
            }
        }
    }

    fn remove_unreleased_tag(&self, content: &str) -> String {
        let delimiter = self.config.delimiter.as_str();
        let tag = self.config.unreleased_tag.as_str();
        content
            .split(delimiter)
            .filter(|line| !line.contains(tag))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}
