//! Operation dispatch
//!
//! Each operation is a short sequence: an optional clean-tree check, at most
//! one version tool invocation, and an optional filter over its output.
//! Guarded operations run the check first and stop on failure, so a dirty
//! tree never reaches the tool.

use std::io::Write;

use crate::cli::args::{operations, BumpArgs, Operation};
use crate::domain::{current_version, is_semver, BumpLevel};
use crate::error::{BumpError, Result};
use crate::git::{ensure_clean, WorkingTree};
use crate::tool::VersionTool;
use crate::ui;

/// Runs operations against a working tree and a version tool
pub struct Dispatcher<W, T> {
    tree: W,
    tool: T,
}

impl<W: WorkingTree, T: VersionTool> Dispatcher<W, T> {
    pub fn new(tree: W, tool: T) -> Self {
        Dispatcher { tree, tool }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Run `operation`, writing its output to `out`.
    pub fn run(&self, operation: &Operation, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(?operation, "dispatching");

        match operation {
            Operation::Help => help(out),
            Operation::CheckClean => self.check_clean(),
            Operation::ShowBump => self.show_bump(out),
            Operation::Version => self.version(out),
            Operation::BumpPatch(args) => self.bump(BumpLevel::Patch, *args, out),
            Operation::BumpMinor(args) => self.bump(BumpLevel::Minor, *args, out),
            Operation::BumpMajor(args) => self.bump(BumpLevel::Major, *args, out),
        }
    }

    /// Succeed silently on a clean tree.
    pub fn check_clean(&self) -> Result<()> {
        ensure_clean(&self.tree)
    }

    /// Print the tool's report verbatim.
    pub fn show_bump(&self, out: &mut dyn Write) -> Result<()> {
        let report = self.tool.show_bump()?;
        out.write_all(&report)?;
        Ok(())
    }

    /// Print the first token of the report's first line.
    pub fn version(&self, out: &mut dyn Write) -> Result<()> {
        let report = self.tool.show_bump()?;
        let report = String::from_utf8_lossy(&report);
        let version = current_version(&report).ok_or_else(|| BumpError::EmptyReport {
            program: self.tool.name().to_string(),
        })?;

        if !is_semver(version) {
            tracing::warn!(
                %version,
                "reported version is not a semantic version; the show-bump output format may have changed"
            );
        }

        writeln!(out, "{}", version)?;
        Ok(())
    }

    /// Bump after checking the tree is clean.
    ///
    /// With `dry_run` the tool is not invoked; the command line is printed
    /// instead.
    pub fn bump(&self, level: BumpLevel, args: BumpArgs, out: &mut dyn Write) -> Result<()> {
        self.check_clean()?;

        if args.dry_run {
            writeln!(out, "{}", ui::success_line("Working tree is clean"))?;
            writeln!(
                out,
                "{}",
                ui::status_line(&format!(
                    "Dry run: would run `{}`",
                    self.tool.describe_bump(level)
                ))
            )?;
            return Ok(());
        }

        tracing::info!(%level, "bumping version");
        self.tool.bump(level)
    }
}

/// Write the operation list. Depends on nothing but the CLI definition.
pub fn help(out: &mut dyn Write) -> Result<()> {
    out.write_all(ui::operation_table(&operations()).as_bytes())?;
    Ok(())
}
