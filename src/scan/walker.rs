//! Filesystem walk that stays on one device

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

/// One entry produced by the walk.
#[derive(Debug)]
pub struct WalkItem {
    pub path: PathBuf,
    /// Metadata of the entry itself (symlinks are not followed)
    pub metadata: Metadata,
}

/// Depth-first walker over a directory tree.
///
/// Never descends into directories on another filesystem and never follows
/// symlinks. A directory's whole subtree is yielded contiguously, right
/// after the directory itself.
pub struct Walker {
    root: PathBuf,
    max_depth: Option<usize>,
}

impl Walker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            max_depth: None,
        }
    }

    /// Limit the walk depth (`Some(1)` visits only direct children).
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn walk(&self) -> WalkIter {
        let inner = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .same_file_system(true)
            .max_depth(self.max_depth)
            .build();
        WalkIter { inner }
    }
}

/// Iterator over walked entries. Entries that cannot be read or stat'ed are
/// skipped.
pub struct WalkIter {
    inner: Walk,
}

impl Iterator for WalkIter {
    type Item = WalkItem;

    fn next(&mut self) -> Option<WalkItem> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            match entry.metadata() {
                Ok(metadata) => {
                    return Some(WalkItem {
                        path: entry.into_path(),
                        metadata,
                    });
                }
                Err(e) => {
                    log::debug!("skipping {}: {e}", entry.path().display());
                }
            }
        }
    }
}
