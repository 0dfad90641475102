use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Version error: {0}")]
    Version(#[from] version::VersionError),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Project directory not found: {0}")]
    ProjectNotFound(PathBuf),

    /// The session stopped before anything was written
    #[error("Premature exit: {0}")]
    Aborted(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Version(err) => err.user_message(),
            Self::Changelog(err) => err.user_message(),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::Watch(err) => format!("Could not watch the bulk edit file: {err}"),
            Self::ProjectNotFound(path) => {
                format!("Project directory not found: {}", path.display())
            }
            Self::Aborted(reason) => format!("Premature Exit > {reason}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }

    /// True for a session the user (or a corrupted bulk edit) ended early
    pub fn is_premature_exit(&self) -> bool {
        match self {
            Self::Aborted(_) => true,
            Self::Changelog(err) => err.is_corrupted_entries(),
            Self::WithContext(_, err) => err.is_premature_exit(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}
