use crate::config::ToolConfig;
use crate::domain::BumpLevel;
use crate::error::{BumpError, Result};
use crate::tool::VersionTool;
use std::io::{self, Write};
use std::process::{Command, ExitStatus};

/// Runs the configured version tool as a child process
#[derive(Debug, Clone)]
pub struct ProcessVersionTool {
    program: String,
    leading_args: Vec<String>,
    show_bump_args: Vec<String>,
    bump_args: Vec<String>,
}

impl ProcessVersionTool {
    pub fn from_config(config: &ToolConfig) -> Result<Self> {
        let program = config.program()?.to_string();

        Ok(ProcessVersionTool {
            program,
            leading_args: config.command[1..].to_vec(),
            show_bump_args: config.show_bump_args.clone(),
            bump_args: config.bump_args.clone(),
        })
    }

    /// Arguments passed to the program for the reporting mode
    pub fn show_bump_argv(&self) -> Vec<String> {
        self.leading_args
            .iter()
            .chain(&self.show_bump_args)
            .cloned()
            .collect()
    }

    /// Arguments passed to the program for a bump at `level`
    pub fn bump_argv(&self, level: BumpLevel) -> Vec<String> {
        let mut args: Vec<String> = self
            .leading_args
            .iter()
            .chain(&self.bump_args)
            .cloned()
            .collect();
        args.push(level.as_str().to_string());
        args
    }

    fn command(&self, args: &[String]) -> Command {
        tracing::debug!(program = %self.program, ?args, "running version tool");
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn spawn_error(&self, source: io::Error) -> BumpError {
        BumpError::ToolSpawn {
            program: self.program.clone(),
            source,
        }
    }

    fn check_status(&self, status: ExitStatus) -> Result<()> {
        if status.success() {
            return Ok(());
        }
        tracing::debug!(program = %self.program, code = ?status.code(), "version tool failed");
        Err(BumpError::ToolFailed {
            program: self.program.clone(),
            code: status.code(),
        })
    }
}

impl VersionTool for ProcessVersionTool {
    fn name(&self) -> &str {
        &self.program
    }

    fn show_bump(&self) -> Result<Vec<u8>> {
        let output = self
            .command(&self.show_bump_argv())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        // The tool's own diagnostics are relayed unchanged.
        if !output.stderr.is_empty() {
            io::stderr().write_all(&output.stderr)?;
        }

        if !output.status.success() {
            // Errors printed to stdout must reach the user too.
            if !output.stdout.is_empty() {
                let mut stdout = io::stdout();
                stdout.write_all(&output.stdout)?;
                stdout.flush()?;
            }
            self.check_status(output.status)?;
        }

        Ok(output.stdout)
    }

    fn bump(&self, level: BumpLevel) -> Result<()> {
        let status = self
            .command(&self.bump_argv(level))
            .status()
            .map_err(|e| self.spawn_error(e))?;

        self.check_status(status)
    }

    fn describe_bump(&self, level: BumpLevel) -> String {
        std::iter::once(self.program.clone())
            .chain(self.bump_argv(level))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
