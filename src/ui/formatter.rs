//! Formatting functions for terminal output.
//!
//! The `*_line` functions only build strings, so the dispatcher can write them
//! to any sink. [display_error] prints to stderr. Colors come from
//! `console`, which turns them off when the stream is not a terminal.

use console::style;

/// Format an error message with a red prefix, styled for stderr.
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold().for_stderr(), message)
}

/// Format a success message with a green checkmark.
pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn status_line(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format the operation table printed by `help`.
///
/// Names are left-aligned in a column as wide as the longest name.
pub fn operation_table(operations: &[(String, String)]) -> String {
    let width = operations
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available operations:\n");
    for (name, about) in operations {
        out.push_str(&format!("  {:<width$}  {}\n", name, about, width = width));
    }
    out
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", error_line(message));
}
