//! Finding the largest entries under a directory
//!
//! - `walker` - depth-first walk that stays on one filesystem
//! - `filter` - size, time and device rules
//! - `accumulator` - bounded top-K ranking
//! - `directory` - per-directory totals for directory mode
//! - `scanner` - ties the pieces together

mod accumulator;
mod config;
mod directory;
mod entry;
mod filter;
mod scanner;
mod walker;

pub use accumulator::{MAX_LIMIT, TopK};
pub use config::{DEFAULT_COUNT, DEFAULT_MIN_SIZE, Mode, ScanConfig, TimeWindow};
pub use directory::DirectoryTotals;
pub use entry::{EntryStat, Ranked, RankedEntry, device_id};
pub use filter::EntryFilter;
pub use scanner::{ScanReport, scan};
pub use walker::{WalkItem, Walker};
