//! In-memory backend for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::provider::{AclSetter, DirEntry, DirectoryProvider, EntryKind};
use crate::GrantError;

/// [`DirectoryProvider`] over a fixed path → children map.
///
/// Paths are the `/`-separated lake form; a path exists only if it was
/// registered with [`MemoryProvider::insert_dir`]. Listing a child without
/// registering it models the store race where a folder shows up in its
/// parent's listing but is gone by the time it is probed.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    tree: BTreeMap<String, Vec<DirEntry>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as a directory with the given children.
    pub fn insert_dir(&mut self, path: &str, children: Vec<DirEntry>) {
        self.tree.insert(path.to_string(), children);
    }

    /// Convenience: a directory child entry.
    pub fn dir(name: &str) -> DirEntry {
        DirEntry { name: name.to_string(), kind: EntryKind::Directory }
    }

    /// Convenience: a file child entry.
    pub fn file(name: &str) -> DirEntry {
        DirEntry { name: name.to_string(), kind: EntryKind::File }
    }
}

impl DirectoryProvider for MemoryProvider {
    fn exists(&self, path: &str) -> Result<bool, GrantError> {
        Ok(self.tree.contains_key(path))
    }

    fn list_children(&self, path: &str) -> Result<Vec<DirEntry>, GrantError> {
        match self.tree.get(path) {
            Some(children) => Ok(children.clone()),
            None => Err(GrantError::Io {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such lake path"),
                path: path.into(),
            }),
        }
    }
}

/// [`AclSetter`] that records every `(path, spec)` pair in application order.
///
/// Backs the CLI's `--dry-run` mode and the test suite's ordering assertions.
#[derive(Debug, Default)]
pub struct RecordingSetter {
    applied: Mutex<Vec<(String, String)>>,
}

impl RecordingSetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything applied so far, oldest first.
    pub fn applied(&self) -> Vec<(String, String)> {
        self.applied.lock().expect("setter log poisoned").clone()
    }
}

impl AclSetter for RecordingSetter {
    fn set_entry(&self, path: &str, spec: &str) -> Result<(), GrantError> {
        self.applied
            .lock()
            .expect("setter log poisoned")
            .push((path.to_string(), spec.to_string()));
        Ok(())
    }
}
