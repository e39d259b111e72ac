//! Hogs - report the largest files or directories on one filesystem

pub mod duration;
pub mod error;
pub mod output;
pub mod owners;
pub mod scan;
pub mod system;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use duration::{AgeSpec, AgeUnit, resolve_bound};
pub use error::HogsError;
pub use output::{OutputConfig, OutputFormat, ReportRow, build_rows, format_size, print_report};
pub use owners::OwnerCache;
pub use scan::{
    DEFAULT_COUNT, DEFAULT_MIN_SIZE, MAX_LIMIT, Mode, RankedEntry, ScanConfig, ScanReport,
    TimeWindow, TopK, scan,
};
