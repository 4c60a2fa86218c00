//! Identities, permissions, and the textual ACL entry grammar.
//!
//! An entry renders as `<kind>:<uuid>:<mode>` with a 3-character mode. A
//! default (inheritable) application renders as the default entry followed by
//! the matching explicit one, comma-separated, so one setter call covers both:
//! `default:user:<uuid>:rwx,user:<uuid>:rwx`.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::provider::AclSetter;
use crate::tasks::{self, TaskHandle};

/// Whether the grantee is a user or a security group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKind::User => write!(f, "user"),
            IdentityKind::Group => write!(f, "group"),
        }
    }
}

/// The identity being granted access. Immutable, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub kind: IdentityKind,
}

impl Identity {
    pub fn new(id: Uuid, kind: IdentityKind) -> Self {
        Self { id, kind }
    }
}

/// Access level carried by one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Execute-only: traversal without read or write.
    Execute,
    /// Full read/write/execute.
    All,
}

impl Permission {
    /// The 3-character mode field of the entry grammar.
    fn mode(self) -> &'static str {
        match self {
            Permission::Execute => "--x",
            Permission::All => "rwx",
        }
    }
}

/// One (identity, permission) binding, rendered to the wire grammar on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessEntry {
    pub identity: Identity,
    pub permission: Permission,
    pub is_default: bool,
}

impl AccessEntry {
    pub fn new(identity: Identity, permission: Permission, is_default: bool) -> Self {
        Self { identity, permission, is_default }
    }

    /// Render the full specifier string handed to the setter.
    pub fn spec(&self) -> String {
        let entry = format!("{}:{}:{}", self.identity.kind, self.identity.id, self.permission.mode());
        if self.is_default {
            format!("default:{},{}", entry, entry)
        } else {
            entry
        }
    }
}

/// Render and apply one entry as an independent background unit of work.
///
/// Returns immediately; the caller must not assume the entry has landed until
/// the handle is waited on. The propagation walk does not use this wrapper —
/// it calls the setter directly because default entries must be in place
/// before descending into a directory.
pub fn apply_entry<S>(
    setter: Arc<S>,
    path: &str,
    identity: Identity,
    permission: Permission,
    is_default: bool,
) -> TaskHandle
where
    S: AclSetter + 'static,
{
    let spec = AccessEntry::new(identity, permission, is_default).spec();
    let path = path.to_string();
    tasks::submit(move || setter.set_entry(&path, &spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::memory::RecordingSetter;

    fn identity() -> Identity {
        Identity::new(Uuid::parse_str("f0b2a1de-4f10-423c-b58f-e1a10a3f4f1d").unwrap(), IdentityKind::User)
    }

    #[test]
    fn execute_maps_to_execute_only_mode() {
        let entry = AccessEntry::new(identity(), Permission::Execute, false);
        assert_eq!(entry.spec(), "user:f0b2a1de-4f10-423c-b58f-e1a10a3f4f1d:--x");
    }

    #[test]
    fn non_execute_maps_to_full_mode() {
        let entry = AccessEntry::new(identity(), Permission::All, false);
        assert_eq!(entry.spec(), "user:f0b2a1de-4f10-423c-b58f-e1a10a3f4f1d:rwx");
    }

    #[test]
    fn default_entries_emit_both_halves() {
        let entry = AccessEntry::new(identity(), Permission::All, true);
        assert_eq!(
            entry.spec(),
            "default:user:f0b2a1de-4f10-423c-b58f-e1a10a3f4f1d:rwx,user:f0b2a1de-4f10-423c-b58f-e1a10a3f4f1d:rwx"
        );
    }

    #[test]
    fn group_identities_use_the_group_kind() {
        let id = Identity::new(identity().id, IdentityKind::Group);
        let entry = AccessEntry::new(id, Permission::All, false);
        assert!(entry.spec().starts_with("group:"));
    }

    #[test]
    fn apply_entry_runs_in_the_background() {
        let setter = Arc::new(RecordingSetter::new());
        let handle = apply_entry(Arc::clone(&setter), "/system", identity(), Permission::All, true);
        handle.wait().unwrap();
        let log = setter.applied();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].0, "/system");
        assert!(log[0].1.starts_with("default:user:"));
    }
}
