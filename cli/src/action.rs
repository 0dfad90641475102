use crate::cli::Commands;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// What a single invocation is going to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Publish the unreleased logs under `version`
    Release { version: String },
    /// Ask whether to create/edit the changelog, then collect logs
    PromptCreation,
    /// Go straight to editing a fresh entry set in the editor
    BulkEdit,
}

/// Decides the action for `command`.
///
/// A release version that is missing or not `MAJOR.MINOR.PATCH` is replaced
/// by the version in the manifest of `project_dir`; the manifest is only read
/// in that case.
pub fn start_process(command: Option<&Commands>, project_dir: &Path) -> Result<Action> {
    let action = match command {
        None | Some(Commands::Log) => Action::PromptCreation,
        Some(Commands::Edit) => Action::BulkEdit,
        Some(Commands::Release { version: explicit }) => {
            let version = match explicit.as_deref() {
                Some(version) if version::is_release_version(version) => version.to_string(),
                explicit => {
                    let package_version = version::read_package_version(project_dir)?;
                    version::resolve_release_version(explicit, &package_version)
                }
            };
            Action::Release { version }
        }
    };
    debug!(?action, "process started");
    Ok(action)
}
