#[cfg(test)]
mod tests {
    use changelog::{Category, Changelog, EntryStore};
    use chlog_tests::{CHANGELOG_FIXTURE as FIXTURE, create_test_js_project};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use version::{SemverVersion, read_package_version, resolve_release_version};

    const RELEASED_HISTORY: &str = "## [1.1.0] - 2024-03-01 09:00:00\n\
                                    ### Changed\n\
                                    * Faster startup\n\
                                    ## [1.0.0] - 2024-01-01 10:00:00\n\
                                    ### Added\n\
                                    * Initial release";

    /// What the CLI does for one invocation: read, rebuild, write back
    fn build(path: &Path, entries: &EntryStore) -> String {
        let existing = fs::read_to_string(path).unwrap();
        let outcome = Changelog::default().rebuild(&existing, entries);
        fs::write(path, &outcome.markdown).unwrap();
        outcome.markdown
    }

    #[test]
    fn fixture_unreleased_logs_are_recovered() {
        let logs = changelog::identify_unreleased_logs(FIXTURE);
        assert_eq!(logs["Added"], vec!["Dark mode", "Export to CSV"]);
        assert_eq!(logs["Fixed"], vec!["Crash when the config file is empty"]);
        assert_eq!(logs["Notes"], vec!["Not a real category"]);
        assert!(!logs.contains_key("Changed"));
    }

    #[test]
    fn fixture_cleans_to_released_history() {
        assert_eq!(changelog::clean_up_existing_markdown(FIXTURE), RELEASED_HISTORY);
    }

    #[test]
    fn logging_a_new_entry_keeps_pending_logs_and_history() {
        let temp_dir = TempDir::new().unwrap();
        create_test_js_project(temp_dir.path(), "1.1.0").unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        let entries = EntryStore::new().with_entry(Category::Added, "Plugin API");
        let written = build(&path, &entries);

        let expected = format!(
            "## [Unreleased]\n\
             ### Fixed\n\
             * Crash when the config file is empty\n\
             ### Added\n\
             * Plugin API\n\
             * Dark mode\n\
             * Export to CSV\n\
             {RELEASED_HISTORY}"
        );
        assert_eq!(written, expected);
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        assert!(!written.contains("Not a real category"));
    }

    #[test]
    fn release_publishes_pending_logs_under_package_version() {
        let temp_dir = TempDir::new().unwrap();
        create_test_js_project(temp_dir.path(), "1.2.0").unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        let package_version = read_package_version(temp_dir.path()).unwrap();
        let version = resolve_release_version(Some("1.2"), &package_version);
        assert_eq!(version, "1.2.0");

        let entries = EntryStore::new().with_release(version, "2024-06-01 12:00:00");
        let written = build(&path, &entries);

        assert!(written.starts_with("## [1.2.0] - 2024-06-01 12:00:00\n### Fixed\n"));
        assert!(!written.contains("[Unreleased]"));
        assert!(written.ends_with(RELEASED_HISTORY));

        // Nothing is pending after a release, so the next build starts fresh
        let next = build(&path, &EntryStore::new());
        assert!(next.starts_with("## [Unreleased]\n## [1.2.0] - 2024-06-01 12:00:00\n"));
    }

    #[test]
    fn repeated_builds_do_not_duplicate_entries() {
        let temp_dir = TempDir::new().unwrap();
        create_test_js_project(temp_dir.path(), "1.1.0").unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        let first = build(&path, &EntryStore::new());
        let second = build(&path, &EntryStore::new());
        assert_eq!(first, second);
        assert_eq!(first.matches("* Dark mode").count(), 1);
    }

    #[test]
    fn bulk_edit_document_survives_a_hand_edit() {
        let entries = EntryStore::new().with_entry(Category::Removed, "Legacy importer");
        let mut document: serde_json::Value =
            serde_json::from_str(&entries.to_json().unwrap()).unwrap();
        document["Security"] = serde_json::json!(["Rotate signing keys"]);

        let edited = EntryStore::from_json(&document.to_string()).unwrap();

        assert_eq!(edited.messages(Category::Removed), ["Legacy importer"]);
        assert_eq!(edited.messages(Category::Security), ["Rotate signing keys"]);
        let markdown = changelog::generate_markdown_for_entries(&edited);
        assert_eq!(
            markdown,
            "## [Unreleased]\n### Security\n* Rotate signing keys\n### Removed\n* Legacy importer"
        );
    }

    #[test]
    fn prerelease_package_version_falls_back_to_core_version() {
        let default = SemverVersion::parse("2.0.0-rc.1").unwrap();
        assert_eq!(resolve_release_version(Some("2.0.0.1"), &default), "2.0.0");
    }
}
