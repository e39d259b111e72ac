//! Notification email body

use super::ReportRow;
use super::table::format_table;
use crate::scan::ScanReport;

/// Render the report as a notification email addressed to the owners of
/// `host`.
pub fn format_template(report: &ScanReport, rows: &[ReportRow], host: &str) -> String {
    let noun = report.mode.noun();
    let root = report.root.display();
    let mut body = String::new();

    body.push_str(&format!("Subject: Largest {noun} under {root} on {host}\n"));
    body.push('\n');
    body.push_str("Hello,\n");
    body.push('\n');
    body.push_str(&format!(
        "The following {noun} are using the most space under {root} on {host}:\n"
    ));
    body.push('\n');
    if rows.is_empty() {
        body.push_str(&format!("(no {noun} matched the report criteria)\n"));
    } else {
        body.push_str(&format_table(rows));
    }
    body.push('\n');
    body.push_str(&format!(
        "Please review these {noun} and remove or archive anything that is no\n\
         longer needed. If the filesystem fills up, running jobs on {host} may\n\
         fail and data may be lost.\n"
    ));
    body.push('\n');
    body.push_str("This message was generated automatically. Nothing has been deleted.\n");
    body
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::scan::Mode;

    fn report(mode: Mode) -> ScanReport {
        ScanReport {
            root: PathBuf::from("/srv/data"),
            mode,
            count: 10,
            entries: Vec::new(),
        }
    }

    fn row() -> ReportRow {
        ReportRow {
            name: "/srv/data/dump.sql".to_string(),
            size: 3 * 1024 * 1024,
            size_human: "3.0M".to_string(),
            owner: "postgres".to_string(),
            group: "postgres".to_string(),
            modified: "2024-05-06 07:08".to_string(),
        }
    }

    #[test]
    fn test_template_wraps_table() {
        let text = format_template(&report(Mode::Files), &[row()], "db01");
        assert!(text.starts_with("Subject: Largest files under /srv/data on db01\n"));
        assert!(text.contains("Hello,"));
        assert!(text.contains("/srv/data/dump.sql"));
        assert!(text.contains("Name"));
        assert!(text.contains("Nothing has been deleted."));
    }

    #[test]
    fn test_template_without_matches() {
        let text = format_template(&report(Mode::Directories), &[], "db01");
        assert!(text.contains("(no directories matched the report criteria)"));
        assert!(!text.contains("Modified"));
    }
}
