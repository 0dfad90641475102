use crate::manifest::ManifestKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed {kind}: {reason}")]
    MalformedManifest { kind: ManifestKind, reason: String },

    #[error("{0} declares no version")]
    MissingVersion(ManifestKind),

    #[error("No package manifest found in {0}")]
    NoManifestDetected(PathBuf),

    #[error("{0}: {1}")]
    WithContext(String, Box<VersionError>),
}

impl VersionError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Message shown by the `chlog` binary
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidVersion(err) => format!("Package version is not semver: {err}"),
            Self::Io(err) => format!("Could not read the package manifest: {err}"),
            Self::MalformedManifest { kind, reason } => {
                format!("{kind} could not be parsed: {reason}")
            }
            Self::MissingVersion(kind) => format!("{kind} has no version field"),
            Self::NoManifestDetected(dir) => {
                let supported: Vec<&str> =
                    ManifestKind::ALL.iter().map(|kind| kind.file_name()).collect();
                format!(
                    "Could not find a package manifest in {}. Supported manifests: {}",
                    dir.display(),
                    supported.join(", ")
                )
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;

/// Lazily attaches a context line to any error convertible into `VersionError`
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<VersionError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let err: VersionError = err.into();
            err.with_context(context())
        })
    }
}
