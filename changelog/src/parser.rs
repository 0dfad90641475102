use crate::config::ChangelogConfig;
use crate::types::{UNRECOGNIZED_CATEGORY, UnreleasedLogs};
use crate::utils::WHITESPACE_PATTERN;
use tracing::debug;

#[derive(Debug, Clone)]
struct ParserState {
    current_category: String,
}

impl ParserState {
    fn new() -> Self {
        Self {
            current_category: UNRECOGNIZED_CATEGORY.to_string(),
        }
    }
}

/// Reads the unreleased part of an existing changelog document
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ChangelogConfig,
}

impl Parser {
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Collects the list items above the first release heading, grouped by
    /// the word following the `###` heading they appear under.
    ///
    /// Items with no usable heading land in [`UNRECOGNIZED_CATEGORY`].
    /// Nothing at or below the first release heading is looked at.
    pub fn identify_unreleased_logs(&self, content: &str) -> UnreleasedLogs {
        let mut logs = UnreleasedLogs::new();
        if content.is_empty() {
            return logs;
        }

        let mut state = ParserState::new();
        for line in content.split(self.config.delimiter.as_str()) {
            if self.config.patterns.release_heading.is_match(line) {
                break;
            }
            self.parse_line(line, &mut state, &mut logs);
        }

        debug!(
            categories = logs.len(),
            messages = logs.values().map(Vec::len).sum::<usize>(),
            "unreleased logs identified"
        );
        logs
    }

    fn parse_line(&self, line: &str, state: &mut ParserState, logs: &mut UnreleasedLogs) {
        let patterns = &self.config.patterns;
        if patterns.category_heading.is_match(line) {
            Self::handle_category_heading(line, state);
        } else if patterns.list_item.is_match(line) {
            self.handle_list_item(line, state, logs);
        }
    }

    fn handle_category_heading(line: &str, state: &mut ParserState) {
        state.current_category = WHITESPACE_PATTERN
            .split(line)
            .nth(1)
            .filter(|word| !word.is_empty())
            .unwrap_or(UNRECOGNIZED_CATEGORY)
            .to_string();
    }

    fn handle_list_item(&self, line: &str, state: &ParserState, logs: &mut UnreleasedLogs) {
        let message = self.config.patterns.list_item.replace(line, "");
        if message.is_empty() {
            return;
        }
        logs.entry(state.current_category.clone())
            .or_default()
            .push(message.into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Changelog

## [Unreleased]
### Added
* Something different
* Blah blah 222

### Fixed
* Crash on empty input
### Added
* Random msg

## [1.1.0] - 2024-03-01 09:00:00
### Added
* Already shipped
";

    fn parse(content: &str) -> UnreleasedLogs {
        Parser::default().identify_unreleased_logs(content)
    }

    #[test]
    fn collects_unreleased_items_per_category() {
        let logs = parse(SAMPLE);
        assert_eq!(
            logs["Added"],
            vec!["Something different", "Blah blah 222", "Random msg"]
        );
        assert_eq!(logs["Fixed"], vec!["Crash on empty input"]);
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn stops_at_first_release_heading() {
        let logs = parse("## [Unreleased]\n### Added\n* x\n## [1.0.0] - t\n### Added\n* y");
        assert_eq!(logs, UnreleasedLogs::from([("Added".to_string(), vec!["x".to_string()])]));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn released_only_document_yields_empty_map() {
        assert!(parse("## [1.0.0] - t\n### Added\n* y\n").is_empty());
    }

    #[test]
    fn items_without_heading_go_to_unrecognized_bucket() {
        let logs = parse("* orphan\n###\n* also orphan\n### Changed\n* tracked");
        assert_eq!(logs[UNRECOGNIZED_CATEGORY], vec!["orphan", "also orphan"]);
        assert_eq!(logs["Changed"], vec!["tracked"]);
    }

    #[test]
    fn empty_items_and_prose_are_ignored() {
        let logs = parse("### Added\n*   \nsome prose\n- dash item\n* kept");
        assert_eq!(logs["Added"], vec!["kept"]);
    }

    #[test]
    fn category_is_second_word_of_heading() {
        let logs = parse("###   Security   fixes\n* patched");
        assert_eq!(logs["Security"], vec!["patched"]);
    }
}
