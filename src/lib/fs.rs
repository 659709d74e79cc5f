//! Filesystem helpers shared by the cleanup and installer flows.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    os::unix::fs::symlink,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used when rewriting JSON documents.
const JSON_INDENT: &[u8] = b"    ";

/// Kind of a direct child of a scanned directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

/// A direct child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the direct children of `root` in directory-listing order.
///
/// Symlinks are reported as `Other` so a prune never follows them.
pub fn list_entries(root: &Path) -> Result<Vec<DirectoryEntry>, io::Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };
        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            kind,
        });
    }
    Ok(entries)
}

/// Remove `path` recursively when it is a directory.
///
/// Returns `false` without error when there is nothing to remove.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool, io::Error> {
    if !path.is_dir() {
        return Ok(false);
    }
    fs::remove_dir_all(path)?;
    Ok(true)
}

/// Point `link` at `target`, replacing whatever currently sits at `link`.
///
/// Dangling links are replaced as well.
pub fn replace_symlink(target: &Path, link: &Path) -> Result<(), io::Error> {
    if fs::symlink_metadata(link).is_ok() {
        fs::remove_file(link)?;
    }
    symlink(target, link)
}

/// Append `text` to `path`, creating the file when needed.
pub fn append_to_file(path: &Path, text: &str) -> Result<(), io::Error> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}

/// Serialize `value` as JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
