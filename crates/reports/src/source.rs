// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Report sources: where scan input comes from.
//!
//! Aggregation never calls the filesystem directly; it works against the
//! [`ReportSource`] capability (list entries, read a file, stat a file) so
//! tests can substitute an in-memory fixture. [`DirSource`] is the
//! production implementation over a real directory.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default report location when no override is configured: a sibling
/// `reports/multimodal_eval` tree one level up from the run root. The
/// fallback is deliberately fixed and relative to the working directory so
/// every composition point resolves the same place.
pub const DEFAULT_REPORTS_DIR: &str = "../reports/multimodal_eval";

/// One directory entry as seen by a scan.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    /// Entry name (a bare filename, not a path).
    pub name: String,
    /// Whether the entry is a regular file.
    pub is_file: bool,
}

/// Capability for listing, reading, and statting report files.
pub trait ReportSource {
    /// Human-readable location label used in diagnostics and errors.
    fn location(&self) -> String;

    /// Enumerate entries with enough metadata to tell regular files from
    /// subdirectories. An error here is fatal for the whole scan.
    fn list(&self) -> io::Result<Vec<SourceEntry>>;

    /// Read one entry's contents as UTF-8 text.
    fn read(&self, name: &str) -> io::Result<String>;

    /// Last-modified time of one entry.
    fn modified(&self, name: &str) -> io::Result<DateTime<Utc>>;
}

/// Report source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `root`. The path is used as given and is
    /// not validated until a scan lists it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ReportSource for DirSource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn list(&self) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                // Non-UTF-8 names can never pass the `.json` filter.
                continue;
            };
            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            entries.push(SourceEntry { name, is_file });
        }
        Ok(entries)
    }

    fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(name))
    }

    fn modified(&self, name: &str) -> io::Result<DateTime<Utc>> {
        let modified = fs::metadata(self.root.join(name))?.modified()?;
        Ok(modified.into())
    }
}

/// In-memory report source for tests and fixtures.
///
/// Entries are returned in insertion order, so fixtures can present an
/// unsorted listing. A file added with `modified: None` reads fine but
/// fails its stat, reproducing a file replaced or deleted between the
/// directory listing and the metadata call.
#[derive(Debug, Default)]
pub struct MemorySource {
    label: String,
    missing: bool,
    entries: Vec<MemoryEntry>,
}

#[derive(Debug)]
struct MemoryEntry {
    name: String,
    kind: MemoryKind,
}

#[derive(Debug)]
enum MemoryKind {
    File {
        contents: String,
        modified: Option<DateTime<Utc>>,
    },
    Unreadable,
    Dir,
}

impl MemorySource {
    /// Create an empty source with the given diagnostics label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            missing: false,
            entries: Vec::new(),
        }
    }

    /// Create a source whose listing always fails, mimicking a missing or
    /// unreadable directory.
    pub fn missing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            missing: true,
            entries: Vec::new(),
        }
    }

    /// Add a file entry with contents and an optional modification time.
    pub fn with_file(
        mut self,
        name: impl Into<String>,
        contents: impl Into<String>,
        modified: Option<DateTime<Utc>>,
    ) -> Self {
        self.entries.push(MemoryEntry {
            name: name.into(),
            kind: MemoryKind::File {
                contents: contents.into(),
                modified,
            },
        });
        self
    }

    /// Add a file entry whose reads fail, as if permissions deny access.
    pub fn with_unreadable_file(mut self, name: impl Into<String>) -> Self {
        self.entries.push(MemoryEntry {
            name: name.into(),
            kind: MemoryKind::Unreadable,
        });
        self
    }

    /// Add a subdirectory entry.
    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.entries.push(MemoryEntry {
            name: name.into(),
            kind: MemoryKind::Dir,
        });
        self
    }

    fn find(&self, name: &str) -> io::Result<&MemoryEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry {name}")))
    }
}

impl ReportSource for MemorySource {
    fn location(&self) -> String {
        self.label.clone()
    }

    fn list(&self) -> io::Result<Vec<SourceEntry>> {
        if self.missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", self.label),
            ));
        }
        Ok(self
            .entries
            .iter()
            .map(|e| SourceEntry {
                name: e.name.clone(),
                is_file: !matches!(e.kind, MemoryKind::Dir),
            })
            .collect())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        match &self.find(name)?.kind {
            MemoryKind::File { contents, .. } => Ok(contents.clone()),
            MemoryKind::Unreadable => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot read {name}"),
            )),
            MemoryKind::Dir => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{name} is a directory"),
            )),
        }
    }

    fn modified(&self, name: &str) -> io::Result<DateTime<Utc>> {
        match &self.find(name)?.kind {
            MemoryKind::File {
                modified: Some(ts), ..
            } => Ok(*ts),
            MemoryKind::File { modified: None, .. } | MemoryKind::Unreadable => Err(
                io::Error::new(io::ErrorKind::Other, format!("stat failed for {name}")),
            ),
            MemoryKind::Dir => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{name} is a directory"),
            )),
        }
    }
}
