//! Directory entry descriptions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

const TEXT_EXTENSIONS: &[&str] = &["txt"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// What an entry holds, judged from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Plain text file (`.txt`)
    Text,
    /// Image file (`.png`, `.jpg`, `.jpeg`, `.gif`)
    Image,
    /// Subdirectory
    Directory,
    /// Anything else
    Other,
}

impl EntryKind {
    /// Classify a file by its extension (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        let ext = match Path::new(name).extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => return EntryKind::Other,
        };

        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            EntryKind::Text
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            EntryKind::Image
        } else {
            EntryKind::Other
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Text => write!(f, "text"),
            EntryKind::Image => write!(f, "image"),
            EntryKind::Directory => write!(f, "dir"),
            EntryKind::Other => write!(f, "other"),
        }
    }
}

/// A single entry inside a store directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name relative to the store root
    pub name: String,
    /// Detected kind
    pub kind: EntryKind,
    /// Size in bytes
    pub size: u64,
    /// Last modification time, if the platform reports one
    pub modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(EntryKind::from_name("a.txt"), EntryKind::Text);
        assert_eq!(EntryKind::from_name("cat.PNG"), EntryKind::Image);
        assert_eq!(EntryKind::from_name("photo.jpeg"), EntryKind::Image);
        assert_eq!(EntryKind::from_name("notes.md"), EntryKind::Other);
        assert_eq!(EntryKind::from_name("Makefile"), EntryKind::Other);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntryKind::Directory.to_string(), "dir");
        assert_eq!(EntryKind::Image.to_string(), "image");
    }
}
