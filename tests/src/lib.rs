//! Fixtures shared by the integration tests.

use std::fs;
use std::path::Path;

/// A changelog with pending logs, one unknown category and two releases
pub const CHANGELOG_FIXTURE: &str = include_str!("../data/CHANGELOG.md");

/// Writes a `package.json` at `version` and the fixture changelog into `dir`
pub fn create_test_js_project(dir: &Path, version: &str) -> std::io::Result<()> {
    let package_json = format!(
        r#"{{
  "name": "test_project",
  "version": "{version}",
  "main": "index.js"
}}"#
    );
    fs::write(dir.join("package.json"), package_json)?;
    fs::write(dir.join("CHANGELOG.md"), CHANGELOG_FIXTURE)?;
    Ok(())
}
