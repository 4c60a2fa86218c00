//! Collaborator seams for the backing store.
//!
//! The core walks never touch the host filesystem directly; they go through
//! [`DirectoryProvider`] (list/exists) and [`AclSetter`] (apply one rendered
//! ACL specifier to one path). Lake paths are always `/`-separated strings,
//! regardless of the host platform's separator convention.

pub mod local;
pub mod memory;

use crate::GrantError;

/// One child returned by listing a lake directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Kind of a directory child.
///
/// `Other` carries whatever kind label the backing store reported, so that
/// propagation can fail naming the offending kind instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other(String),
}

/// Read-only view of the lake's directory tree.
///
/// Implementations must be `Send + Sync`; the recursive propagation task runs
/// on a background thread and shares the provider with the caller.
pub trait DirectoryProvider: Send + Sync {
    /// Whether `path` currently exists in the store.
    fn exists(&self, path: &str) -> Result<bool, GrantError>;

    /// List the immediate children of `path`, in whatever order the store
    /// returns them. Callers sort when order matters.
    fn list_children(&self, path: &str) -> Result<Vec<DirEntry>, GrantError>;
}

/// Applies one rendered ACL specifier string to one lake path.
///
/// The call is synchronous: when it returns `Ok`, the entry is set. Callers
/// that want fire-and-forget semantics submit the call through
/// [`crate::tasks::submit`] (see [`crate::acl::apply_entry`]); the propagation
/// walk calls this directly because default entries must land before descent.
pub trait AclSetter: Send + Sync {
    /// Apply `spec` (grammar: `["default:"]<kind>:<uuid>:<mode>[,...]`) to `path`.
    fn set_entry(&self, path: &str, spec: &str) -> Result<(), GrantError>;
}

/// Join `parent` and `child` with a forward slash, collapsing the root case
/// so `"/"` + `"system"` yields `"/system"` rather than `"//system"`.
pub fn join_path(parent: &str, child: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}
