use std::path::PathBuf;

/// The primary error type for all operations in the `lakegrant` crate.
#[derive(Debug)]
pub enum GrantError {
    /// An I/O error occurred while talking to the backing store.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// A date-bucket step found an existing parent folder, but no child whose
    /// numeric name is less than or equal to the requested bound. Distinct from
    /// the parent not existing at all, which is reported as absent, not an error.
    NoQualifyingChild { bound: u32, path: String },

    /// A directory listing returned an entry that is neither a file nor a
    /// directory. Fatal: propagation at that level aborts.
    UnsupportedEntryKind { kind: String, path: String },

    /// The ACL setter rejected or failed an entry application.
    Setter { path: String, message: String },

    /// A background task panicked before signalling completion.
    TaskPanicked { task_id: u64 },

    /// A wrapper for any other error that doesn't fit the specific variants.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for GrantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrantError::Io { source, path } => write!(f, "I/O error on path '{}': {}", path.display(), source),
            GrantError::NoQualifyingChild { bound, path } => write!(f, "No child folder numbered {} or lower under '{}'", bound, path),
            GrantError::UnsupportedEntryKind { kind, path } => write!(f, "Unsupported entry kind '{}' under '{}'", kind, path),
            GrantError::Setter { path, message } => write!(f, "ACL setter failed on '{}': {}", path, message),
            GrantError::TaskPanicked { task_id } => write!(f, "Background task {} panicked", task_id),
            GrantError::Other(e) => write!(f, "An unexpected error occurred: {}", e),
        }
    }
}

impl std::error::Error for GrantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrantError::Io { source, .. } => Some(source),
            GrantError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

// Generic IO error conversion that doesn't carry a path
impl From<std::io::Error> for GrantError {
    fn from(err: std::io::Error) -> Self {
        GrantError::Io { source: err, path: PathBuf::new() }
    }
}
