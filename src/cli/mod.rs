//! CLI argument parsing and operation dispatch

pub mod args;
pub mod orchestration;

pub use args::{operations, BumpArgs, Cli, Operation};
pub use orchestration::Dispatcher;
