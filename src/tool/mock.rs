use crate::domain::BumpLevel;
use crate::error::{BumpError, Result};
use crate::tool::VersionTool;
use std::cell::RefCell;

/// A recorded invocation of the mock tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCall {
    ShowBump,
    Bump(BumpLevel),
}

/// Mock version tool that records calls instead of spawning processes
#[derive(Debug)]
pub struct MockVersionTool {
    report: Vec<u8>,
    exit_code: Option<i32>,
    calls: RefCell<Vec<ToolCall>>,
}

impl MockVersionTool {
    /// A tool whose show-bump prints `report` and whose bumps succeed
    pub fn new(report: impl Into<Vec<u8>>) -> Self {
        MockVersionTool {
            report: report.into(),
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A tool whose every invocation exits with `code`
    pub fn failing(code: i32) -> Self {
        MockVersionTool {
            report: Vec::new(),
            exit_code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Invocations so far, oldest first
    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ToolCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.exit_code {
            Some(code) => Err(BumpError::ToolFailed {
                program: "mock".to_string(),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockVersionTool {
    fn default() -> Self {
        Self::new("0.1.0 -> patch=0.1.1 minor=0.2.0 major=1.0.0\n")
    }
}

impl VersionTool for MockVersionTool {
    fn name(&self) -> &str {
        "mock"
    }

    fn show_bump(&self) -> Result<Vec<u8>> {
        self.record(ToolCall::ShowBump)?;
        Ok(self.report.clone())
    }

    fn bump(&self, level: BumpLevel) -> Result<()> {
        self.record(ToolCall::Bump(level))
    }

    fn describe_bump(&self, level: BumpLevel) -> String {
        format!("mock bump {}", level)
    }
}
