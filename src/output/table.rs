//! Ranked table rendering

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::ReportRow;
use super::utils::column_width;

const HEADERS: [&str; 5] = ["Name", "Size", "Owner", "Group", "Modified"];
const GAP: &str = "  ";

struct Widths {
    name: usize,
    size: usize,
    owner: usize,
    group: usize,
}

impl Widths {
    fn measure(rows: &[ReportRow]) -> Self {
        Self {
            name: column_width(HEADERS[0], rows.iter().map(|r| r.name.as_str())),
            size: column_width(HEADERS[1], rows.iter().map(|r| r.size_human.as_str())),
            owner: column_width(HEADERS[2], rows.iter().map(|r| r.owner.as_str())),
            group: column_width(HEADERS[3], rows.iter().map(|r| r.group.as_str())),
        }
    }
}

/// Write the table, colouring the header and sizes when `use_color` is set.
pub fn write_table<W: WriteColor>(out: &mut W, rows: &[ReportRow], use_color: bool) -> io::Result<()> {
    let w = Widths::measure(rows);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut size_color = ColorSpec::new();
    size_color.set_fg(Some(Color::Cyan));

    if use_color {
        out.set_color(&bold)?;
    }
    write!(
        out,
        "{:<nw$}{GAP}{:>sw$}{GAP}{:<ow$}{GAP}{:<gw$}{GAP}{}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        HEADERS[4],
        nw = w.name,
        sw = w.size,
        ow = w.owner,
        gw = w.group,
    )?;
    if use_color {
        out.reset()?;
    }
    writeln!(out)?;

    for row in rows {
        write!(out, "{:<nw$}{GAP}", row.name, nw = w.name)?;
        if use_color {
            out.set_color(&size_color)?;
        }
        write!(out, "{:>sw$}", row.size_human, sw = w.size)?;
        if use_color {
            out.reset()?;
        }
        writeln!(
            out,
            "{GAP}{:<ow$}{GAP}{:<gw$}{GAP}{}",
            row.owner,
            row.group,
            row.modified,
            ow = w.owner,
            gw = w.group,
        )?;
    }

    Ok(())
}

/// Render the table as plain text.
pub fn format_table(rows: &[ReportRow]) -> String {
    let mut buffer = Buffer::no_color();
    write_table(&mut buffer, rows, false).expect("writing to a Buffer cannot fail");
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}
