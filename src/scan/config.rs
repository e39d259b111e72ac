//! Configuration types for scans

use std::time::SystemTime;

use serde::Serialize;

/// Default minimum size: entries must be strictly larger than 1 MiB.
pub const DEFAULT_MIN_SIZE: u64 = 1024 * 1024;

/// Default number of entries to report.
pub const DEFAULT_COUNT: usize = 10;

/// What gets ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Individual regular files
    #[default]
    Files,
    /// Directories, by the total size of the files directly inside them
    Directories,
}

impl Mode {
    /// Plural noun used in reports.
    pub fn noun(self) -> &'static str {
        match self {
            Mode::Files => "files",
            Mode::Directories => "directories",
        }
    }
}

/// Modification-time window. Both ends are exclusive; `None` leaves that
/// side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Only include entries modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include entries modified before this time
    pub older_than: Option<SystemTime>,
}

impl TimeWindow {
    pub fn contains(&self, modified: SystemTime) -> bool {
        self.newer_than.is_none_or(|newer| modified > newer)
            && self.older_than.is_none_or(|older| modified < older)
    }

    pub fn is_open(&self) -> bool {
        self.newer_than.is_none() && self.older_than.is_none()
    }
}

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub mode: Mode,
    /// Only look at direct children of the root (file mode only)
    pub just: bool,
    /// Entries must be strictly larger than this many bytes
    pub min_size: u64,
    /// Number of entries to report
    pub count: usize,
    pub window: TimeWindow,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Files,
            just: false,
            min_size: DEFAULT_MIN_SIZE,
            count: DEFAULT_COUNT,
            window: TimeWindow::default(),
        }
    }
}

impl ScanConfig {
    /// Walk depth limit implied by this configuration.
    pub fn max_depth(&self) -> Option<usize> {
        match (self.mode, self.just) {
            (Mode::Files, true) => Some(1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_open_window_contains_everything() {
        let window = TimeWindow::default();
        assert!(window.is_open());
        assert!(window.contains(UNIX_EPOCH));
        assert!(window.contains(SystemTime::now()));
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let window = TimeWindow {
            newer_than: Some(at(100)),
            older_than: Some(at(200)),
        };
        assert!(!window.contains(at(100)));
        assert!(window.contains(at(101)));
        assert!(window.contains(at(199)));
        assert!(!window.contains(at(200)));
    }

    #[test]
    fn test_just_only_limits_file_mode() {
        let mut config = ScanConfig {
            just: true,
            ..Default::default()
        };
        assert_eq!(config.max_depth(), Some(1));
        config.mode = Mode::Directories;
        assert_eq!(config.max_depth(), None);
    }
}
