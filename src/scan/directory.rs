//! Per-directory size totals
//!
//! Each regular file counts toward its immediate parent directory only.
//! Totals are kept on a stack of the directories the walk is currently
//! inside; a directory's total is final once the walk leaves its subtree,
//! and only then is it handed to the bounded ranking.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::error::HogsError;

use super::accumulator::TopK;

/// Accumulates directory totals from a depth-first walk.
#[derive(Debug)]
pub struct DirectoryTotals {
    open: Vec<(PathBuf, u64)>,
    ranked: TopK<u64>,
}

impl DirectoryTotals {
    pub fn new(count: usize) -> Result<Self, HogsError> {
        Ok(Self {
            open: Vec::new(),
            ranked: TopK::new(count)?,
        })
    }

    /// Feed the next walked entry. Entries must arrive in depth-first order
    /// with each directory before its contents.
    pub fn visit(&mut self, path: &Path, meta: &Metadata) {
        self.close_outside(path);

        let file_type = meta.file_type();
        if file_type.is_dir() {
            self.open.push((path.to_path_buf(), 0));
        } else if file_type.is_file() {
            self.add_file(path, meta.len());
        }
    }

    fn add_file(&mut self, path: &Path, size: u64) {
        let Some(parent) = path.parent() else {
            return;
        };
        match self.open.last_mut() {
            Some((dir, total)) if dir.as_path() == parent => *total += size,
            _ => log::debug!(
                "{} arrived outside its directory, not counted",
                path.display()
            ),
        }
    }

    /// Close every open directory that does not contain `path`.
    fn close_outside(&mut self, path: &Path) {
        while let Some((dir, _)) = self.open.last() {
            if path != dir.as_path() && path.starts_with(dir) {
                break;
            }
            if let Some((dir, total)) = self.open.pop() {
                self.ranked.record(dir, total);
            }
        }
    }

    /// Close the remaining directories and return the largest totals,
    /// largest first.
    pub fn finish(mut self) -> Vec<(PathBuf, u64)> {
        while let Some((dir, total)) = self.open.pop() {
            self.ranked.record(dir, total);
        }
        self.ranked.finalize()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::scan::walker::Walker;

    fn totals(root: &Path, count: usize) -> Vec<(PathBuf, u64)> {
        let mut totals = DirectoryTotals::new(count).unwrap();
        for item in Walker::new(root).walk() {
            totals.visit(&item.path, &item.metadata);
        }
        totals.finish()
    }

    #[test]
    fn test_only_immediate_parent_is_credited() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("root.bin"), vec![0u8; 10]).unwrap();
        fs::write(root.join("a/one.bin"), vec![0u8; 100]).unwrap();
        fs::write(root.join("a/two.bin"), vec![0u8; 200]).unwrap();
        fs::write(root.join("a/b/deep.bin"), vec![0u8; 1_000]).unwrap();

        let ranking = totals(root, 10);
        assert_eq!(
            ranking,
            vec![
                (root.join("a/b"), 1_000),
                (root.join("a"), 300),
                (root.to_path_buf(), 10),
            ]
        );
    }

    #[test]
    fn test_files_after_subdirectory_still_count() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        // Walk order is unsorted, so m/ may come between the two files
        fs::create_dir_all(root.join("m")).unwrap();
        fs::write(root.join("a.bin"), vec![0u8; 5]).unwrap();
        fs::write(root.join("m/inner.bin"), vec![0u8; 7]).unwrap();
        fs::write(root.join("z.bin"), vec![0u8; 11]).unwrap();

        let ranking = totals(root, 10);
        assert!(ranking.contains(&(root.to_path_buf(), 16)));
        assert!(ranking.contains(&(root.join("m"), 7)));
    }

    #[test]
    fn test_sibling_prefix_is_not_ancestor() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ab")).unwrap();
        fs::create_dir_all(root.join("abc")).unwrap();
        fs::write(root.join("ab/x.bin"), vec![0u8; 3]).unwrap();
        fs::write(root.join("abc/y.bin"), vec![0u8; 4]).unwrap();

        let ranking = totals(root, 10);
        assert!(ranking.contains(&(root.join("ab"), 3)));
        assert!(ranking.contains(&(root.join("abc"), 4)));
    }

    #[test]
    fn test_many_directories_are_bounded() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for i in 0..250 {
            let sub = root.join(format!("d{i:03}"));
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("f.bin"), vec![0u8; i + 1]).unwrap();
        }

        let ranking = totals(root, 3);
        let sizes: Vec<u64> = ranking.iter().map(|(_, s)| *s).collect();
        assert_eq!(sizes, vec![250, 249, 248]);
        assert_eq!(ranking[0].0, root.join("d249"));
    }
}
