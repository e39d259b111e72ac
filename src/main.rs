//! CLI entry point for hogs

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use hogs::{
    DEFAULT_COUNT, DEFAULT_MIN_SIZE, HogsError, MAX_LIMIT, Mode, OutputConfig, OutputFormat,
    ScanConfig, TimeWindow, print_report, resolve_bound,
};

/// Exit status for usage errors and `--help`.
const EXIT_USAGE: i32 = 1;
/// Exit status for fatal errors (bad root, output failure).
const EXIT_FATAL: i32 = 2;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "hogs")]
#[command(about = "Report the largest files or directories on a single filesystem")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["file", "directory"])))]
struct Args {
    /// Directory to scan
    path: PathBuf,

    /// Rank individual files
    #[arg(short = 'f', long = "file")]
    file: bool,

    /// Rank directories by the total size of the files directly inside them
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Only look at files directly inside the root (file mode only)
    #[arg(short = 'j', long = "just")]
    just: bool,

    /// Only report entries larger than SIZE bytes.
    /// Accepts suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(
        short = 's',
        long = "size",
        value_name = "SIZE",
        default_value_t = DEFAULT_MIN_SIZE,
        value_parser = parse_file_size
    )]
    size: u64,

    /// Number of entries to report (1-99)
    #[arg(
        short = 'c',
        long = "count",
        default_value_t = DEFAULT_COUNT,
        value_parser = parse_count
    )]
    count: usize,

    /// Wrap the report in a notification email body
    #[arg(short = 't', long = "template", conflicts_with = "json")]
    template: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Only consider entries modified more than AGE ago.
    /// Age format: 6m (months of 30 days), 3d (days), 12h (hours)
    #[arg(short = 'o', long = "older", value_name = "AGE")]
    older: Option<String>,

    /// Only consider entries modified less than AGE ago.
    /// Age format: 6m (months of 30 days), 3d (days), 12h (hours)
    #[arg(short = 'n', long = "newer", value_name = "AGE")]
    newer: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

/// Parse the result count, which must stay below the working-set limit.
fn parse_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if count == 0 || count >= MAX_LIMIT {
        return Err(format!("must be between 1 and {}", MAX_LIMIT - 1));
    }
    Ok(count)
}

fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayVersion => process::exit(0),
            _ => process::exit(EXIT_USAGE),
        }
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = parse_args();
    init_logging(args.verbose);

    let now = SystemTime::now();
    let window = TimeWindow {
        newer_than: resolve_bound("newer", args.newer.as_deref(), now),
        older_than: resolve_bound("older", args.older.as_deref(), now),
    };

    let config = ScanConfig {
        mode: if args.directory {
            Mode::Directories
        } else {
            Mode::Files
        },
        just: args.just,
        min_size: args.size,
        count: args.count,
        window,
    };

    hogs::system::lower_priority();

    let report = match hogs::scan(&args.path, &config) {
        Ok(report) => report,
        Err(e @ HogsError::InvalidCount { .. }) => {
            eprintln!("hogs: {}", e);
            process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("hogs: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    let output_config = OutputConfig {
        format: if args.template {
            OutputFormat::Template
        } else if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        },
        use_color: should_use_color(args.color),
    };
    let host = if output_config.format == OutputFormat::Template {
        hogs::system::host_name()
    } else {
        String::new()
    };

    if let Err(e) = print_report(&report, &output_config, &host) {
        eprintln!("hogs: error writing output: {}", e);
        process::exit(EXIT_FATAL);
    }
}
