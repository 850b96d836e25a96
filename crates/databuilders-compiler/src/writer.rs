//! File output.
//!
//! The session only touches the file system through `FileWriter`, so the same
//! pipeline can write to disk or collect files in memory (dry runs, tests).

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Destination for generated files. Shared across worker threads.
pub trait FileWriter: Sync {
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create a directory and all of its parents.
    fn make_directory(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it. A missing directory is not
    /// an error.
    fn remove_directory(&self, path: &Path) -> io::Result<()>;
}

/// Writes to the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskWriter;

impl FileWriter for DiskWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn make_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_directory(&self, path: &Path) -> io::Result<()> {
        match fs::remove_dir_all(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }
}

/// Keeps files in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every written file, ordered by path.
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.lock().map(|s| s.files.clone()).unwrap_or_default()
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.lock().ok()?.files.get(path).cloned()
    }

    pub fn has_directory(&self, path: &Path) -> bool {
        self.lock().is_ok_and(|s| s.directories.contains(path))
    }

    pub fn is_empty(&self) -> bool {
        self.lock()
            .is_ok_and(|s| s.files.is_empty() && s.directories.is_empty())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("memory writer lock poisoned"))
    }
}

impl FileWriter for MemoryWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut state = self.lock()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !state.directories.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory `{}` does not exist", parent.display()),
            ));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn make_directory(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock()?;
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.directories.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn remove_directory(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock()?;
        state.directories.retain(|dir| !dir.starts_with(path));
        state.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }
}
