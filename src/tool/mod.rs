//! External version tool
//!
//! bumpctl never edits version files itself. Reporting and bumping are both
//! delegated to an external program through the [VersionTool] trait.

pub mod mock;
pub mod process;

pub use mock::{MockVersionTool, ToolCall};
pub use process::ProcessVersionTool;

use crate::domain::BumpLevel;
use crate::error::Result;

/// What bumpctl needs from a version tool: a report and a bump
pub trait VersionTool {
    /// Program name used in messages
    fn name(&self) -> &str;

    /// Run the reporting mode and return its stdout bytes verbatim.
    ///
    /// The report starts with the current version followed by the candidate
    /// next versions. It is not required to be UTF-8.
    fn show_bump(&self) -> Result<Vec<u8>>;

    /// Run the mutating mode for `level`.
    ///
    /// The tool updates the version, commits and tags. Its output goes
    /// straight to the user.
    fn bump(&self, level: BumpLevel) -> Result<()>;

    /// Human-readable command line that [VersionTool::bump] would run.
    fn describe_bump(&self, level: BumpLevel) -> String;
}
