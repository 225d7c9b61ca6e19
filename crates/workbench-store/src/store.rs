//! Directory-backed file store

use crate::entry::{EntryKind, FileEntry};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use workbench_core::{WorkbenchError, WorkbenchResult};

/// Manages the files directly inside a single directory
///
/// The directory is not created on construction; call [`FileStore::create`]
/// before adding files. Nothing is cached in memory, so every listing
/// reflects the filesystem as it is.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory managed by this store
    root_path: PathBuf,
}

impl FileStore {
    /// Create a store for `root_path` without touching the filesystem
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    /// Directory managed by this store
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Whether the root directory is present
    pub fn exists(&self) -> bool {
        self.root_path.is_dir()
    }

    /// Ensure the root directory exists
    ///
    /// Succeeds without changes if the directory is already there. The parent
    /// must exist; a regular file at `root_path` is an IO error.
    pub fn create(&self) -> WorkbenchResult<()> {
        if self.exists() {
            debug!(path = %self.root_path.display(), "Directory already exists");
            return Ok(());
        }

        match fs::create_dir(&self.root_path) {
            Ok(()) => {
                info!(path = %self.root_path.display(), "Created directory");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.exists() => Ok(()),
            Err(e) => Err(WorkbenchError::Io(e)),
        }
    }

    /// Write `content` as the whole of `file_name`, replacing any previous file
    pub fn add_text_file(&self, file_name: &str, content: &str) -> WorkbenchResult<PathBuf> {
        let path = self.entry_path(file_name)?;
        self.require_root()?;

        fs::write(&path, content)?;

        info!(
            file = file_name,
            bytes = content.len(),
            path = %self.root_path.display(),
            "Added text file"
        );
        Ok(path)
    }

    /// Copy the bytes at `source_path` into `file_name`
    ///
    /// Returns the number of bytes copied.
    pub fn add_binary_file(&self, file_name: &str, source_path: &Path) -> WorkbenchResult<u64> {
        let path = self.entry_path(file_name)?;
        self.require_root()?;

        if !source_path.is_file() {
            return Err(WorkbenchError::NotFound(format!(
                "source file '{}'",
                source_path.display()
            )));
        }

        // Copying a file onto itself would truncate it
        if let (Ok(src), Ok(dst)) = (source_path.canonicalize(), path.canonicalize()) {
            if src == dst {
                debug!(file = file_name, "Source is already the stored entry");
                return Ok(fs::metadata(&dst)?.len());
            }
        }

        let copied = fs::copy(source_path, &path)?;

        info!(
            file = file_name,
            source = %source_path.display(),
            bytes = copied,
            "Added binary file"
        );
        Ok(copied)
    }

    /// Copy `source_path` into the store under its own file name
    pub fn add_file_from(&self, source_path: &Path) -> WorkbenchResult<String> {
        let file_name = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| WorkbenchError::InvalidName(source_path.display().to_string()))?;

        self.add_binary_file(&file_name, source_path)?;
        Ok(file_name)
    }

    /// Names of the entries directly inside the root directory
    ///
    /// Order is whatever the filesystem returns. A missing root directory
    /// yields an empty list; use [`FileStore::exists`] to tell the two apart.
    /// Entries whose names are not valid UTF-8 are skipped, since they could
    /// not be addressed by the other operations.
    pub fn list_entries(&self) -> WorkbenchResult<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root_path)? {
            let entry = entry?;
            if let Some(name) = utf8_name(&entry) {
                names.push(name);
            }
        }

        debug!(
            path = %self.root_path.display(),
            count = names.len(),
            "Listed entries"
        );
        Ok(names)
    }

    /// Like [`FileStore::list_entries`], with kind, size and modification time
    pub fn list_detailed(&self) -> WorkbenchResult<Vec<FileEntry>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root_path)? {
            let entry = entry?;
            let Some(name) = utf8_name(&entry) else {
                continue;
            };
            let metadata = entry.metadata()?;

            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::from_name(&name)
            };

            entries.push(FileEntry {
                name,
                kind,
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        Ok(entries)
    }

    /// Read a stored entry as UTF-8 text
    pub fn read_text_file(&self, file_name: &str) -> WorkbenchResult<String> {
        let path = self.existing_entry(file_name)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Read a stored entry as raw bytes
    pub fn read_binary_file(&self, file_name: &str) -> WorkbenchResult<Vec<u8>> {
        let path = self.existing_entry(file_name)?;
        Ok(fs::read(path)?)
    }

    /// Delete a stored file
    pub fn remove_entry(&self, file_name: &str) -> WorkbenchResult<()> {
        let path = self.existing_entry(file_name)?;
        fs::remove_file(&path)?;

        info!(file = file_name, path = %self.root_path.display(), "Removed file");
        Ok(())
    }

    fn require_root(&self) -> WorkbenchResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(WorkbenchError::NotFound(format!(
                "directory '{}'",
                self.root_path.display()
            )))
        }
    }

    /// Path of an entry that must already exist as a file
    fn existing_entry(&self, file_name: &str) -> WorkbenchResult<PathBuf> {
        let path = self.entry_path(file_name)?;
        self.require_root()?;

        if !path.is_file() {
            return Err(WorkbenchError::NotFound(format!(
                "file '{}' in '{}'",
                file_name,
                self.root_path.display()
            )));
        }
        Ok(path)
    }

    /// Resolve `file_name` inside the root, rejecting anything that is not a
    /// plain single-component name
    fn entry_path(&self, file_name: &str) -> WorkbenchResult<PathBuf> {
        let invalid = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\', '\0']);

        if invalid {
            return Err(WorkbenchError::InvalidName(file_name.to_string()));
        }
        Ok(self.root_path.join(file_name))
    }
}

/// Entry name as UTF-8, or `None` for names the store cannot address
fn utf8_name(entry: &fs::DirEntry) -> Option<String> {
    match entry.file_name().into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            warn!(name = ?raw, "Skipping entry with non-UTF-8 name");
            None
        }
    }
}
