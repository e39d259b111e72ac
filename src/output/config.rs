//! Output configuration types

/// How the report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain ranked table
    #[default]
    Table,
    /// Table wrapped in a notification email body
    Template,
    /// Machine-readable JSON
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Only honoured by the table format
    pub use_color: bool,
}
