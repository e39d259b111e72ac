//! Report formatting and display
//!
//! - `config` - output configuration types
//! - `utils` - size, time and column helpers
//! - `table` - ranked table
//! - `template` - notification email body around the table
//! - `json` - JSON output

mod config;
mod json;
mod table;
mod template;
mod utils;

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream};

use crate::owners::OwnerCache;
use crate::scan::ScanReport;

pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonEntry, JsonReport, format_json};
pub use table::{format_table, write_table};
pub use template::format_template;
pub use utils::{column_width, format_modified, format_size};

/// One display row, with sizes, names and times already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub size: u64,
    pub size_human: String,
    pub owner: String,
    pub group: String,
    pub modified: String,
}

/// Format every ranked entry of a report for display.
pub fn build_rows(report: &ScanReport, owners: &mut OwnerCache) -> Vec<ReportRow> {
    report
        .entries
        .iter()
        .map(|entry| ReportRow {
            name: entry.path.display().to_string(),
            size: entry.stat.size,
            size_human: format_size(entry.stat.size),
            owner: owners.user_name(entry.stat.uid),
            group: owners.group_name(entry.stat.gid),
            modified: format_modified(entry.stat.modified),
        })
        .collect()
}

/// Print a report to stdout in the configured format.
pub fn print_report(report: &ScanReport, config: &OutputConfig, host: &str) -> io::Result<()> {
    let rows = build_rows(report, &mut OwnerCache::new());

    match config.format {
        OutputFormat::Table => {
            let choice = if config.use_color {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            };
            let mut stdout = StandardStream::stdout(choice);
            write_table(&mut stdout, &rows, config.use_color)
        }
        OutputFormat::Template => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(format_template(report, &rows, host).as_bytes())
        }
        OutputFormat::Json => {
            let json = format_json(report, &rows)?;
            println!("{}", json);
            Ok(())
        }
    }
}
