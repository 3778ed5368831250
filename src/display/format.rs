//! Output formatting modes and traits for compact display

use std::str::FromStr;

/// Per-cycle report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented human readable block
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}. Valid options: text, json", s)),
        }
    }
}

/// Trait for types that can be formatted compactly
pub trait CompactFormat {
    /// Convert the type to a compact one-line format
    ///
    /// The output should be a single line holding only the essential
    /// figures, suitable for log messages.
    fn to_compact_format(&self) -> String;
}
