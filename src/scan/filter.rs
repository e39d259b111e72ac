//! Inclusion rules for walked entries

use std::fs::Metadata;

use super::config::TimeWindow;
use super::entry::{EntryStat, device_id};

/// Decides which entries are eligible for ranking.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    root_dev: u64,
    min_size: u64,
    window: TimeWindow,
}

impl EntryFilter {
    pub fn new(root_dev: u64, min_size: u64, window: TimeWindow) -> Self {
        Self {
            root_dev,
            min_size,
            window,
        }
    }

    /// Check whether an entry lives on the same filesystem as the root.
    pub fn same_device(&self, meta: &Metadata) -> bool {
        device_id(meta) == self.root_dev
    }

    /// File mode check: a regular file on the root's filesystem that passes
    /// the size and time filters.
    pub fn accepts_file(&self, meta: &Metadata) -> bool {
        if !meta.file_type().is_file() || !self.same_device(meta) {
            return false;
        }
        // An unreadable mtime counts as not matching
        match meta.modified() {
            Ok(modified) => self.passes(meta.len(), modified),
            Err(_) => false,
        }
    }

    /// Check an already collected stat (directory pseudo-entries).
    pub fn accepts_stat(&self, stat: &EntryStat) -> bool {
        self.passes(stat.size, stat.modified)
    }

    fn passes(&self, size: u64, modified: std::time::SystemTime) -> bool {
        size > self.min_size && self.window.contains(modified)
    }
}
