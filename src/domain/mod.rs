//! Domain logic - pure rules independent of git and the version tool

pub mod level;
pub mod report;

pub use level::BumpLevel;
pub use report::{current_version, is_semver};
