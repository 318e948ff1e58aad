//! Memoized directory enumeration.
//!
//! A `DirectoryCache` lives for exactly one prompt session. Each directory is
//! read from disk at most once; later lookups reuse the raw listing even if
//! the directory changed underneath. Filtering happens on every lookup so
//! the cache only ever stores raw entries.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// One child of an enumerated directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }
}

/// Source of raw directory listings.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// Reads directories from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // Follows symlinks, so a link to a directory counts as one
            let is_dir = fs::metadata(&path)?.is_dir();

            entries.push(DirectoryEntry::new(
                name,
                path.to_string_lossy().to_string(),
                is_dir,
            ));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// True for names with a component starting with `.` followed by something
/// other than `.` or `/`. `..` and `...` are therefore not hidden.
pub fn is_hidden(name: &str) -> bool {
    name.split('/').any(|component| {
        let mut chars = component.chars();
        chars.next() == Some('.') && chars.next().is_some_and(|c| c != '.')
    })
}

pub struct DirectoryCache<L = FsLister> {
    lister: L,
    listings: HashMap<String, Vec<DirectoryEntry>>,
}

impl DirectoryCache<FsLister> {
    pub fn new() -> Self {
        Self::with_lister(FsLister)
    }
}

impl Default for DirectoryCache<FsLister> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DirectoryLister> DirectoryCache<L> {
    pub fn with_lister(lister: L) -> Self {
        Self {
            lister,
            listings: HashMap::new(),
        }
    }

    /// Visible subdirectories of `dir`, in listing order.
    ///
    /// Never fails: a missing or unreadable directory is logged and yields an
    /// empty list. Failed reads are not cached, so a later lookup retries.
    pub fn list(&mut self, dir: &str) -> Vec<DirectoryEntry> {
        if !self.listings.contains_key(dir) {
            match self.read(dir) {
                Some(entries) => {
                    self.listings.insert(dir.to_string(), entries);
                }
                None => return Vec::new(),
            }
        }

        self.listings
            .get(dir)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.is_dir && !is_hidden(&entry.name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_cached(&self, dir: &str) -> bool {
        self.listings.contains_key(dir)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn read(&self, dir: &str) -> Option<Vec<DirectoryEntry>> {
        let start = Instant::now();
        match self.lister.read_entries(Path::new(dir)) {
            Ok(entries) => {
                log::debug!(
                    "DirectoryCache: read {} entries from {:?} in {:?}",
                    entries.len(),
                    dir,
                    start.elapsed()
                );
                Some(entries)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("DirectoryCache: {:?} does not exist", dir);
                None
            }
            Err(e) => {
                log::warn!("DirectoryCache: failed to read {:?}: {}", dir, e);
                None
            }
        }
    }
}
