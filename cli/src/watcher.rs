//! Notices when the bulk-edit file is saved.
//!
//! Editors save in different ways: some write in place, others write a
//! sibling file and rename it over the original. Watching the parent
//! directory and filtering on the file name catches both.

use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, warn};

pub struct FileWatcher {
    watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    target: Option<PathBuf>,
}

impl FileWatcher {
    pub fn new() -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let watcher = notify::recommended_watcher(tx)?;

        Ok(Self {
            watcher,
            receiver: rx,
            target: None,
        })
    }

    /// Starts watching `path`, which must already exist
    pub fn watch(&mut self, path: &Path) -> Result<(), notify::Error> {
        self.unwatch();

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        self.watcher.watch(dir, RecursiveMode::NonRecursive)?;
        self.target = Some(path.to_path_buf());
        debug!(path = %path.display(), "watching bulk edit file");
        Ok(())
    }

    pub fn unwatch(&mut self) {
        if let Some(dir) = self.target.take().as_deref().and_then(Path::parent) {
            let _ = self.watcher.unwatch(dir);
        }
    }

    /// Drains pending events; true if any of them saved the watched file
    pub fn check_for_changes(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.receiver.try_recv() {
                Ok(Ok(event)) => {
                    if self.is_relevant_event(&event) {
                        changed = true;
                    }
                }
                Ok(Err(err)) => warn!(%err, "file watch error"),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        changed
    }

    fn is_relevant_event(&self, event: &Event) -> bool {
        let Some(target) = self.target.as_deref() else {
            return false;
        };
        // Renamed-over files are reported under the final name
        let names_target = event
            .paths
            .iter()
            .any(|p| p.file_name() == target.file_name());
        names_target && is_save_event(&event.kind)
    }
}

fn is_save_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Name(_))
            | EventKind::Access(AccessKind::Close(AccessMode::Write))
            | EventKind::Create(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn writes_and_creates_count_as_saves() {
        assert!(is_save_event(&EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(is_save_event(&EventKind::Create(CreateKind::File)));
        assert!(is_save_event(&EventKind::Access(AccessKind::Close(
            AccessMode::Write
        ))));
        assert!(!is_save_event(&EventKind::Remove(RemoveKind::File)));
        assert!(!is_save_event(&EventKind::Access(AccessKind::Open(
            AccessMode::Read
        ))));
    }

    #[test]
    fn only_events_for_the_target_are_relevant() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bulk-edit-log.json");
        std::fs::write(&path, "{}").unwrap();

        let mut watcher = FileWatcher::new().unwrap();
        let kind = EventKind::Modify(ModifyKind::Any);
        assert!(!watcher.is_relevant_event(&event(kind, "/tmp/bulk-edit-log.json")));

        watcher.watch(&path).unwrap();
        assert!(watcher.is_relevant_event(&event(kind, path.to_str().unwrap())));
        assert!(!watcher.is_relevant_event(&event(kind, "/tmp/other.json")));

        watcher.unwatch();
        assert!(!watcher.is_relevant_event(&event(kind, path.to_str().unwrap())));
    }
}
