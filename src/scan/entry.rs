//! Ranked entry types

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Anything that can be ranked by a size key.
pub trait Ranked {
    fn rank_key(&self) -> u64;
}

impl Ranked for u64 {
    fn rank_key(&self) -> u64 {
        *self
    }
}

/// Size, modification time and ownership of a file or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub size: u64,
    pub modified: SystemTime,
    pub uid: u32,
    pub gid: u32,
}

impl Ranked for EntryStat {
    fn rank_key(&self) -> u64 {
        self.size
    }
}

impl EntryStat {
    /// Build from filesystem metadata, taking the size from the metadata.
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self::with_size(meta, meta.len())
    }

    /// Build from filesystem metadata with an externally computed size
    /// (used for directory totals).
    pub fn with_size(meta: &Metadata, size: u64) -> Self {
        let (uid, gid) = owner_ids(meta);
        Self {
            size,
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
            uid,
            gid,
        }
    }
}

#[cfg(unix)]
fn owner_ids(meta: &Metadata) -> (u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn owner_ids(_meta: &Metadata) -> (u32, u32) {
    (0, 0)
}

/// Device id of the filesystem holding an entry.
#[cfg(unix)]
pub fn device_id(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.dev()
}

#[cfg(not(unix))]
pub fn device_id(_meta: &Metadata) -> u64 {
    0
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub path: PathBuf,
    pub stat: EntryStat,
}
