use crate::error::{BumpError, Result};
use crate::git::WorkingTree;

/// Mock working tree for testing without a real repository
pub struct MockWorkingTree {
    changes: Vec<String>,
    failure: Option<String>,
}

impl MockWorkingTree {
    /// A tree with nothing pending
    pub fn clean() -> Self {
        MockWorkingTree {
            changes: Vec::new(),
            failure: None,
        }
    }

    /// A tree reporting the given pending paths
    pub fn with_changes<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockWorkingTree {
            changes: paths.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// A tree whose status query fails with a git error
    pub fn failing(message: impl Into<String>) -> Self {
        MockWorkingTree {
            changes: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl Default for MockWorkingTree {
    fn default() -> Self {
        Self::clean()
    }
}

impl WorkingTree for MockWorkingTree {
    fn pending_changes(&self) -> Result<Vec<String>> {
        if let Some(message) = &self.failure {
            return Err(BumpError::Git(git2::Error::from_str(message)));
        }
        Ok(self.changes.clone())
    }
}
