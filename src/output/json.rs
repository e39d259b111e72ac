//! JSON output formatting

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use super::ReportRow;
use super::utils::format_rfc3339;
use crate::scan::{Mode, ScanReport};

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub root: PathBuf,
    pub mode: Mode,
    pub count: usize,
    pub entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub path: PathBuf,
    pub size: u64,
    pub size_human: String,
    pub modified: String,
    pub owner: String,
    pub group: String,
    pub uid: u32,
    pub gid: u32,
}

impl JsonReport {
    pub fn new(report: &ScanReport, rows: &[ReportRow]) -> Self {
        let entries = report
            .entries
            .iter()
            .zip(rows)
            .map(|(entry, row)| JsonEntry {
                path: entry.path.clone(),
                size: entry.stat.size,
                size_human: row.size_human.clone(),
                modified: format_rfc3339(entry.stat.modified),
                owner: row.owner.clone(),
                group: row.group.clone(),
                uid: entry.stat.uid,
                gid: entry.stat.gid,
            })
            .collect();
        Self {
            root: report.root.clone(),
            mode: report.mode,
            count: report.count,
            entries,
        }
    }
}

/// Serialize the report as pretty-printed JSON.
pub fn format_json(report: &ScanReport, rows: &[ReportRow]) -> io::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(report, rows)).map_err(io::Error::other)
}
