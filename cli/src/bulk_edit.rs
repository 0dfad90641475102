//! Bulk editing of entries as JSON in an external editor.
//!
//! The entries are written to a temporary file, the editor is launched on it
//! and the first save is read back. The file is removed however the edit
//! ends.

use crate::config::Settings;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use crate::watcher::FileWatcher;
use changelog::EntryStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Grace period after the first save event so a multi-step save finishes
const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Removes the bulk-edit file when dropped
struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    fn create(path: &Path, content: &str) -> Result<Self> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write bulk edit file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            debug!(path = %self.path.display(), %err, "bulk edit file not removed");
        }
    }
}

/// Lets the user edit `entries` and returns the edited store.
///
/// # Errors
/// Fails when the editor cannot be started, exits unsuccessfully or is not
/// saved before the timeout, and when the saved document is rejected.
pub fn bulk_edit(settings: &Settings, entries: &EntryStore) -> Result<EntryStore> {
    let path = &settings.bulk_edit_path;
    let _guard = TempFileGuard::create(path, &entries.to_json()?)?;

    let mut watcher = FileWatcher::new()?;
    watcher.watch(path)?;

    let mut editor = launch_editor(&settings.editor, path)?;
    ui::info_message(&format!(
        "Edit {} in {} and save to continue",
        path.display(),
        settings.editor
    ));

    wait_for_save(&mut watcher, &mut editor, settings.edit_timeout)?;
    thread::sleep(SETTLE_DELAY);
    watcher.check_for_changes();
    watcher.unwatch();

    let edited = read_back(path)?;
    info!(entries = edited.len(), "bulk edit applied");
    Ok(edited)
}

/// Parses the saved bulk-edit file
pub fn read_back(path: &Path) -> Result<EntryStore> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bulk edit file {}", path.display()))?;
    EntryStore::from_json(&content)
        .with_context(|| format!("Bulk edit in {} was not applied", path.display()))
}

/// Starts `editor` (a command with optional arguments) on `path`
fn launch_editor(editor: &str, path: &Path) -> Result<Child> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::Other("No editor configured for bulk edit".to_string()))?;

    debug!(program, path = %path.display(), "launching editor");
    Command::new(program)
        .args(parts)
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to launch editor '{editor}'"))
}

fn wait_for_save(watcher: &mut FileWatcher, editor: &mut Child, timeout: Duration) -> Result<()> {
    let started = Instant::now();
    let mut editor_running = true;

    loop {
        if watcher.check_for_changes() {
            return Ok(());
        }

        if editor_running {
            if let Some(status) = editor.try_wait()? {
                editor_running = false;
                if !status.success() {
                    return Err(CliError::Other(format!(
                        "Editor exited with {status} before the bulk edit was saved"
                    )));
                }
                // Launchers like `code` return at once and edit in the background
                debug!("editor process returned, still waiting for a save");
            }
        }

        if started.elapsed() >= timeout {
            warn!(?timeout, "bulk edit timed out");
            return Err(CliError::Aborted(format!(
                "Bulk edit was not saved within {} seconds",
                timeout.as_secs()
            )));
        }

        thread::sleep(POLL_INTERVAL);
    }
}
