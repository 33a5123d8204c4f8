//! User interface module - terminal formatting.

pub mod formatter;

pub use formatter::{display_error, error_line, operation_table, status_line, success_line};
