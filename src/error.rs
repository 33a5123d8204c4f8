use thiserror::Error;

/// Unified error type for bumpctl operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Working tree is not clean. Please commit or stash your changes first.")]
    DirtyWorkingTree { paths: Vec<String> },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to run '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}", describe_code(.code))]
    ToolFailed { program: String, code: Option<i32> },

    #[error("'{program}' printed no version report")]
    EmptyReport { program: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Convenience type alias for Results in bumpctl
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// A failing tool hands its own exit code through; a tool that cannot be
    /// found maps to 127 like a shell would.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::ToolFailed { code, .. } => code.unwrap_or(1),
            BumpError::ToolSpawn { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                127
            }
            _ => 1,
        }
    }

    /// Whether the error text was already shown to the user by the tool itself.
    pub fn is_relayed(&self) -> bool {
        matches!(self, BumpError::ToolFailed { .. })
    }
}
