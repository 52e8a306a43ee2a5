//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;

use crate::config::OutputFormat;

/// Envelope for machine-readable output.
#[derive(Debug, Serialize)]
pub struct JsonOut<T> {
    pub ok: bool,
    pub data: T,
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Render a value in the requested format, without a trailing newline.
pub fn render<T: Serialize + Display>(format: OutputFormat, data: &T) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(data.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonOut { ok: true, data }),
    }
}

/// Print a value in the requested format.
pub fn print_one<T: Serialize + Display>(format: OutputFormat, data: &T) -> serde_json::Result<()> {
    info(&render(format, data)?);
    Ok(())
}
