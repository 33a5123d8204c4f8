use crate::error::Result;
use crate::git::WorkingTree;
use git2::{Repository, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Working tree status backed by git2
///
/// The repository is discovered from `root` upward on each query, so
/// constructing this never fails and operations that do not look at the
/// tree work outside a repository.
pub struct Git2WorkingTree {
    root: PathBuf,
    include_untracked: bool,
}

impl Git2WorkingTree {
    pub fn new<P: AsRef<Path>>(root: P, include_untracked: bool) -> Self {
        Git2WorkingTree {
            root: root.as_ref().to_path_buf(),
            include_untracked,
        }
    }

    fn open(&self) -> Result<Repository> {
        Ok(Repository::discover(&self.root)?)
    }
}

impl WorkingTree for Git2WorkingTree {
    fn pending_changes(&self) -> Result<Vec<String>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(self.include_untracked)
            .recurse_untracked_dirs(self.include_untracked)
            .include_ignored(false)
            .include_unmodified(false)
            .renames_head_to_index(true);

        let repo = self.open()?;
        let statuses = repo.statuses(Some(&mut opts))?;

        let paths = statuses
            .iter()
            .filter(|entry| {
                let status = entry.status();
                !status.is_empty() && !status.contains(Status::IGNORED)
            })
            .map(|entry| {
                entry
                    .path()
                    .map(str::to_string)
                    .unwrap_or_else(|| String::from_utf8_lossy(entry.path_bytes()).into_owned())
            })
            .collect();

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo_with_commit() -> TempDir {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("tracked.txt"), "one\n").unwrap();

        {
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("tracked.txt")).unwrap();
            index.write().unwrap();
            let tree_id = index.write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let sig = Signature::now("Test", "test@example.com").unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
        }

        dir
    }

    #[test]
    fn test_clean_after_commit() {
        let dir = init_repo_with_commit();
        let tree = Git2WorkingTree::new(dir.path(), true);
        assert!(tree.pending_changes().unwrap().is_empty());
    }

    #[test]
    fn test_modified_file_is_pending() {
        let dir = init_repo_with_commit();
        fs::write(dir.path().join("tracked.txt"), "two\n").unwrap();
        let tree = Git2WorkingTree::new(dir.path(), true);
        assert_eq!(tree.pending_changes().unwrap(), vec!["tracked.txt"]);
    }

    #[test]
    fn test_deleted_file_is_pending() {
        let dir = init_repo_with_commit();
        fs::remove_file(dir.path().join("tracked.txt")).unwrap();
        let tree = Git2WorkingTree::new(dir.path(), true);
        assert_eq!(tree.pending_changes().unwrap(), vec!["tracked.txt"]);
    }

    #[test]
    fn test_untracked_file_counts_unless_disabled() {
        let dir = init_repo_with_commit();
        fs::write(dir.path().join("new.txt"), "new\n").unwrap();

        let tree = Git2WorkingTree::new(dir.path(), true);
        assert_eq!(tree.pending_changes().unwrap(), vec!["new.txt"]);

        let tree = Git2WorkingTree::new(dir.path(), false);
        assert!(tree.pending_changes().unwrap().is_empty());
    }

    #[test]
    fn test_ignored_file_is_not_pending() {
        let dir = init_repo_with_commit();
        fs::create_dir_all(dir.path().join(".git/info")).unwrap();
        fs::write(dir.path().join(".git/info/exclude"), "*.log\n").unwrap();
        fs::write(dir.path().join("build.log"), "noise\n").unwrap();
        let tree = Git2WorkingTree::new(dir.path(), true);
        assert!(tree.pending_changes().unwrap().is_empty());
    }

    #[test]
    fn test_discovers_from_subdirectory() {
        let dir = init_repo_with_commit();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("tracked.txt"), "changed\n").unwrap();

        let tree = Git2WorkingTree::new(&nested, false);
        assert_eq!(tree.pending_changes().unwrap(), vec!["tracked.txt"]);
    }
}
