//! Test utilities for bumpctl integration tests
#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for bump-my-version: logs its arguments next to itself and prints
/// a fixed report. `FAKE_TOOL_EXIT` makes it fail with that code.
pub const FAKE_TOOL: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
if [ -n "$FAKE_TOOL_EXIT" ]; then
    echo "fake tool: configured to fail" >&2
    exit "$FAKE_TOOL_EXIT"
fi
case "$1" in
    show-bump)
        printf '1.2.3 -> patch=1.2.4 minor=1.3.0 major=2.0.0\nsecond line\n'
        ;;
    bump)
        echo "bumped $2"
        ;;
    *)
        echo "unknown command: $1" >&2
        exit 2
        ;;
esac
"#;

/// Create a repository with one committed file.
pub fn init_repo_with_commit(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    fs::write(dir.join("README.md"), "# project\n").unwrap();

    {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
            .unwrap();
    }

    repo
}

/// A clean repository plus a fake version tool and a config pointing at it.
///
/// The tool and config live outside the repository so they never make the
/// tree dirty.
#[cfg(unix)]
pub struct Fixture {
    pub repo_dir: TempDir,
    pub tool_dir: TempDir,
    pub config_path: PathBuf,
}

#[cfg(unix)]
impl Fixture {
    pub fn new() -> Self {
        let repo_dir = TempDir::new().unwrap();
        init_repo_with_commit(repo_dir.path());

        let tool_dir = TempDir::new().unwrap();
        let tool_path = tool_dir.path().join("fake-bump");
        write_executable(&tool_path, FAKE_TOOL);

        let config_path = tool_dir.path().join("bumpctl.toml");
        write_tool_config(&config_path, &[tool_path.to_str().unwrap()]);

        Fixture {
            repo_dir,
            tool_dir,
            config_path,
        }
    }

    pub fn repo(&self) -> &Path {
        self.repo_dir.path()
    }

    /// Argument lines the fake tool has been called with.
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.tool_dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Point the config at a different tool script.
    pub fn use_tool_script(&self, contents: &str) {
        let path = self.tool_dir.path().join("custom-tool");
        write_executable(&path, contents);
        write_tool_config(&self.config_path, &[path.to_str().unwrap()]);
    }

    /// Leave an uncommitted edit in the repository.
    pub fn make_dirty(&self) {
        fs::write(self.repo().join("README.md"), "# changed\n").unwrap();
    }

    /// Leave an untracked file in the repository.
    pub fn add_untracked(&self) {
        fs::write(self.repo().join("scratch.txt"), "notes\n").unwrap();
    }
}

/// Write a config whose tool command is `command`.
pub fn write_tool_config(path: &Path, command: &[&str]) {
    let quoted: Vec<String> = command.iter().map(|part| format!("'{}'", part)).collect();
    let toml = format!("[tool]\ncommand = [{}]\n", quoted.join(", "));
    fs::write(path, toml).unwrap();
}

#[cfg(unix)]
pub fn write_executable(path: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, contents).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}
