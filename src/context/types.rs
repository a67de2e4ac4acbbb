use std::{
    collections::BTreeSet,
    ffi::OsStr,
    fmt,
};

use crate::constants::DEFAULT_EXCLUDED_DIRS;
use crate::context::error::ReadError;

/// A path relative to the snapshot root, always using `/` as separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileEntry(String);

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileEntry {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FileEntry {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Directory names that are pruned from traversal before descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds extra names on top of the current set.
    pub fn extend<I, S>(
        mut self,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn contains(
        &self,
        name: &OsStr,
    ) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// True if any directory component of a `/`-separated relative path is excluded.
    pub fn excludes_path(
        &self,
        rel: &str,
    ) -> bool {
        let mut parts: Vec<&str> = rel.split('/').collect();
        parts.pop();
        parts.iter().any(|p| self.names.contains(*p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS)
    }
}

/// Ordered list of entries. Order drives output order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        entry: impl Into<FileEntry>,
    ) {
        self.entries.push(entry.into());
    }

    pub fn extend(
        &mut self,
        other: FileList,
    ) {
        self.entries.extend(other.entries);
    }

    pub fn sort(&mut self) {
        self.entries.sort();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FileEntry] {
        &self.entries
    }
}

impl<E: Into<FileEntry>> FromIterator<E> for FileList {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for FileList {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// What follows a record's header.
#[derive(Debug)]
pub enum RecordBody {
    Contents(String),
    Missing,
    Unreadable(ReadError),
}

/// One header + body unit of the output document.
#[derive(Debug)]
pub struct Record {
    pub path: FileEntry,
    pub body: RecordBody,
}

/// Per-run tallies, logged once the document is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub records: usize,
    pub read: usize,
    pub missing: usize,
    pub unreadable: usize,
}

impl DocumentStats {
    pub fn tally(
        &mut self,
        body: &RecordBody,
    ) {
        self.records += 1;
        match body {
            RecordBody::Contents(_) => self.read += 1,
            RecordBody::Missing => self.missing += 1,
            RecordBody::Unreadable(_) => self.unreadable += 1,
        }
    }
}
