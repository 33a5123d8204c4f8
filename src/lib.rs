pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod tool;
pub mod ui;

pub use error::{BumpError, Result};
