use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const BULK_EDIT_TEMP_FILE: &str = "bulk-edit-log.json";
pub const LOG_MESSAGE_LIMIT: usize = 80;
pub const DEFAULT_EDITOR: &str = "code";
pub const DEFAULT_EDIT_TIMEOUT_SECS: u64 = 600;

/// Everything a command needs to know about where and how to work
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_dir: PathBuf,
    pub changelog_path: PathBuf,
    pub bulk_edit_path: PathBuf,
    pub editor: String,
    pub edit_timeout: Duration,
    pub timestamp_format: String,
    pub log_message_limit: usize,
    pub verbose: bool,
}

impl Settings {
    /// Resolves paths from the parsed command line.
    ///
    /// Without `--dir`, the project is the nearest ancestor of the current
    /// directory that has a package manifest, or the current directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_dir = match &cli.dir {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                if !dir.is_dir() {
                    return Err(CliError::ProjectNotFound(dir));
                }
                dir
            }
            None => {
                let cwd = env::current_dir()?;
                version::find_project_root(&cwd).unwrap_or(cwd)
            }
        };

        Ok(Self::for_project(&project_dir, &cli.file)
            .with_editor(&cli.editor)
            .with_edit_timeout(Duration::from_secs(cli.edit_timeout))
            .with_timestamp_format(&cli.timestamp_format)
            .with_verbose(cli.verbose))
    }

    /// Defaults for a project rooted at `project_dir`
    pub fn for_project(project_dir: &Path, changelog_file: &str) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            changelog_path: project_dir.join(changelog_file),
            bulk_edit_path: env::temp_dir().join(BULK_EDIT_TEMP_FILE),
            editor: DEFAULT_EDITOR.to_string(),
            edit_timeout: Duration::from_secs(DEFAULT_EDIT_TIMEOUT_SECS),
            timestamp_format: changelog::DEFAULT_TIMESTAMP_FORMAT.to_string(),
            log_message_limit: LOG_MESSAGE_LIMIT,
            verbose: false,
        }
    }

    pub fn with_editor(mut self, editor: &str) -> Self {
        self.editor = editor.to_string();
        self
    }

    pub fn with_edit_timeout(mut self, timeout: Duration) -> Self {
        self.edit_timeout = timeout;
        self
    }

    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
