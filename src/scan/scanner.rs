//! Scan driver: walk, filter, rank

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HogsError;

use super::accumulator::TopK;
use super::config::{Mode, ScanConfig};
use super::directory::DirectoryTotals;
use super::entry::{EntryStat, RankedEntry, device_id};
use super::filter::EntryFilter;
use super::walker::Walker;

/// Result of a scan, largest entries first.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Absolute path of the scanned root
    pub root: PathBuf,
    pub mode: Mode,
    pub count: usize,
    pub entries: Vec<RankedEntry>,
}

/// Scan `root` and return its largest files or directories.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanReport, HogsError> {
    let root = resolve_root(root)?;
    let root_meta = fs::metadata(&root)?;
    let filter = EntryFilter::new(device_id(&root_meta), config.min_size, config.window);

    if config.just && config.mode == Mode::Directories {
        log::info!("--just has no effect in directory mode");
    }
    log::info!("scanning {} for largest {}", root.display(), config.mode.noun());
    if !config.window.is_open() {
        log::debug!("modification window: {:?}", config.window);
    }

    let walker = Walker::new(&root).with_max_depth(config.max_depth());
    let (entries, visited) = match config.mode {
        Mode::Files => rank_files(&walker, &filter, config.count)?,
        Mode::Directories => rank_directories(&walker, &filter, config.count)?,
    };
    log::info!("visited {visited} entries, reporting {}", entries.len());

    Ok(ScanReport {
        root,
        mode: config.mode,
        count: config.count,
        entries,
    })
}

/// Canonicalize the root, failing if it is not an existing directory.
fn resolve_root(root: &Path) -> Result<PathBuf, HogsError> {
    match fs::canonicalize(root) {
        Ok(path) if path.is_dir() => Ok(path),
        _ => Err(HogsError::NoSuchDirectory(root.to_path_buf())),
    }
}

fn rank_files(
    walker: &Walker,
    filter: &EntryFilter,
    count: usize,
) -> Result<(Vec<RankedEntry>, u64), HogsError> {
    let mut top = TopK::new(count)?;
    let mut visited = 0u64;

    for item in walker.walk() {
        visited += 1;
        if filter.accepts_file(&item.metadata) {
            top.record(item.path, EntryStat::from_metadata(&item.metadata));
        }
    }

    let entries = top
        .finalize()
        .into_iter()
        .map(|(path, stat)| RankedEntry { path, stat })
        .collect();
    Ok((entries, visited))
}

fn rank_directories(
    walker: &Walker,
    filter: &EntryFilter,
    count: usize,
) -> Result<(Vec<RankedEntry>, u64), HogsError> {
    let (totals, visited) = directory_totals(walker, filter, count)?;

    // Second pass: attribute mtime and ownership to the surviving
    // directories, then apply the size and time filters.
    let mut top = TopK::new(count)?;
    for (dir, size) in totals {
        let meta = match fs::symlink_metadata(&dir) {
            Ok(meta) => meta,
            Err(e) => {
                log::debug!("skipping {}: {e}", dir.display());
                continue;
            }
        };
        let stat = EntryStat::with_size(&meta, size);
        if filter.accepts_stat(&stat) {
            top.record(dir, stat);
        }
    }

    let entries = top
        .finalize()
        .into_iter()
        .map(|(path, stat)| RankedEntry { path, stat })
        .collect();
    Ok((entries, visited))
}

/// Largest raw directory totals on the root's filesystem.
fn directory_totals(
    walker: &Walker,
    filter: &EntryFilter,
    count: usize,
) -> Result<(Vec<(PathBuf, u64)>, u64), HogsError> {
    let mut totals = DirectoryTotals::new(count)?;
    let mut visited = 0u64;

    for item in walker.walk() {
        visited += 1;
        if filter.same_device(&item.metadata) {
            totals.visit(&item.path, &item.metadata);
        }
    }
    Ok((totals.finish(), visited))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const KIB: usize = 1024;

    fn write(root: &Path, rel: &str, len: usize) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![0u8; len]).unwrap();
    }

    fn sizes(report: &ScanReport) -> Vec<u64> {
        report.entries.iter().map(|e| e.stat.size).collect()
    }

    #[test]
    fn test_missing_root() {
        let err = scan(Path::new("/nonexistent_hogs_root_12345"), &ScanConfig::default())
            .unwrap_err();
        assert!(matches!(err, HogsError::NoSuchDirectory(_)));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "plain.bin", 4);
        let err = scan(&dir.path().join("plain.bin"), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, HogsError::NoSuchDirectory(_)));
    }

    #[test]
    fn test_invalid_count() {
        let dir = TempDir::new().unwrap();
        let config = ScanConfig {
            count: 150,
            ..Default::default()
        };
        assert!(matches!(
            scan(dir.path(), &config),
            Err(HogsError::InvalidCount { count: 150 })
        ));
    }

    #[test]
    fn test_files_ranked_and_thresholded() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/two.bin", 2 * KIB * KIB);
        write(dir.path(), "b/one.bin", KIB * KIB);
        write(dir.path(), "c/half.bin", 500 * KIB);
        write(dir.path(), "d/three.bin", 3 * KIB * KIB);

        let config = ScanConfig {
            count: 2,
            ..Default::default()
        };
        let report = scan(dir.path(), &config).unwrap();
        assert_eq!(
            sizes(&report),
            vec![3 * 1024 * 1024, 2 * 1024 * 1024]
        );
        assert!(report.entries[0].path.ends_with("d/three.bin"));
        assert!(report.root.is_absolute());
    }

    #[test]
    fn test_just_mode_skips_nested() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "top.bin", 10);
        write(dir.path(), "sub/nested.bin", 20);

        let config = ScanConfig {
            just: true,
            min_size: 0,
            ..Default::default()
        };
        let report = scan(dir.path(), &config).unwrap();
        assert_eq!(sizes(&report), vec![10]);
    }

    #[test]
    fn test_directory_mode() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "big/a.bin", 300);
        write(dir.path(), "big/b.bin", 200);
        write(dir.path(), "big/nested/c.bin", 50);
        write(dir.path(), "small/d.bin", 100);

        let config = ScanConfig {
            mode: Mode::Directories,
            min_size: 60,
            ..Default::default()
        };
        let report = scan(dir.path(), &config).unwrap();
        assert_eq!(sizes(&report), vec![500, 100]);
        assert!(report.entries[0].path.ends_with("big"));
        assert!(report.entries[1].path.ends_with("small"));
    }

    #[cfg(unix)]
    #[test]
    fn test_directories_on_other_filesystems_are_not_ranked() {
        use crate::scan::accumulator::MAX_LIMIT;
        use crate::scan::config::TimeWindow;

        let root = Path::new("/");
        let proc = Path::new("/proc");
        let (Ok(root_meta), Ok(proc_meta)) = (fs::metadata(root), fs::metadata(proc)) else {
            return;
        };
        if device_id(&root_meta) == device_id(&proc_meta) {
            return;
        }

        let filter = EntryFilter::new(device_id(&root_meta), 0, TimeWindow::default());
        let walker = Walker::new(root).with_max_depth(Some(1));
        let (totals, _) = directory_totals(&walker, &filter, MAX_LIMIT - 1).unwrap();
        assert!(totals.iter().any(|(dir, _)| dir == root));
        assert!(totals.iter().all(|(dir, _)| !dir.starts_with(proc)));
    }
}
