//! Per-directory listing logic used by the walker.
//!
//! A listing reads one directory, classifies each child as a directory or a
//! file (following symlinks), drops anything the exclusion rules reject, and
//! returns the survivors in name order. The directory handle is released
//! before the caller recurses into any child.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::config::WalkerConfig;
use super::filter::EntryKind;

/// One kept child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw file name, used as the sort key.
    pub file_name: OsString,
    /// Display name (lossy for non-UTF-8 names).
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Depth and filter checks shared by every recursion step.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check if we're at maximum depth
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Read, classify, filter and sort the children of `path`.
    ///
    /// Returns `None` when the directory cannot be listed at all. Individual
    /// entries that vanish or cannot be classified are skipped.
    pub fn read_and_filter_entries(&self, path: &Path) -> Option<Vec<DirectoryEntry>> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                debug!("skipping unreadable directory {}: {}", path.display(), e);
                return None;
            }
        };

        let mut kept: Vec<DirectoryEntry> = entries
            .filter_map(|e| e.ok())
            .filter_map(|entry| self.classify(entry.file_name(), entry.path()))
            .collect();
        kept.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Some(kept)
    }

    fn classify(&self, file_name: OsString, path: PathBuf) -> Option<DirectoryEntry> {
        let kind = entry_kind(&path)?;
        let name = file_name.to_string_lossy().into_owned();

        if self.config.rules.is_excluded(&name, kind) {
            trace!("excluded {:?} {}", kind, path.display());
            return None;
        }

        Some(DirectoryEntry {
            file_name,
            name,
            path,
            kind,
        })
    }

    /// Calculate the prefix for child entries
    pub fn calculate_child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}    ", current_prefix)
        } else {
            format!("{}│   ", current_prefix)
        }
    }
}

/// Classify a path by following symlinks. Broken links and special files
/// (sockets, FIFOs, devices) have no kind.
pub fn entry_kind(path: &Path) -> Option<EntryKind> {
    let meta = fs::metadata(path).ok()?;
    if meta.is_dir() {
        Some(EntryKind::Directory)
    } else if meta.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}
