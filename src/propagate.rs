//! Recursive ACL propagation over the lake tree.
//!
//! The walk is depth-first but runs on an explicit worklist rather than the
//! call stack; lake trees are wide and deep enough that native recursion is a
//! liability. The ordering invariant is the important part: a directory's
//! default (inheritable) entry is applied before the walk descends into it,
//! so children created concurrently during a long propagation still inherit
//! the grant.

use tracing::debug;

use crate::acl::{AccessEntry, Identity, Permission};
use crate::provider::{join_path, AclSetter, DirectoryProvider, EntryKind};
use crate::GrantError;

/// Work done by one propagation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagateStats {
    /// Directories that received a default entry.
    pub directories: u64,
    /// Files that received a full-access entry.
    pub files: u64,
}

/// Walk the tree under `start`, granting `identity` full access throughout.
///
/// Every file child gets a full-access entry and every directory child gets a
/// full-access default entry; the entry for a file is scoped to the directory
/// being listed, matching the lake's directory-scoped access checks. Entries
/// are applied synchronously through the setter so the default-before-descend
/// ordering holds.
///
/// A child of any kind other than file or directory aborts the walk
/// immediately with [`GrantError::UnsupportedEntryKind`]; remaining siblings
/// are not processed. There is no retry and no checkpoint — a failed run is
/// restarted from the top.
pub fn propagate<P, S>(
    provider: &P,
    setter: &S,
    start: &str,
    identity: Identity,
) -> Result<PropagateStats, GrantError>
where
    P: DirectoryProvider + ?Sized,
    S: AclSetter + ?Sized,
{
    let mut stats = PropagateStats::default();
    let mut pending = vec![start.to_string()];

    while let Some(current) = pending.pop() {
        debug!(path = %current, "propagating into directory");
        for child in provider.list_children(&current)? {
            match child.kind {
                EntryKind::File => {
                    let spec = AccessEntry::new(identity, Permission::All, false).spec();
                    setter.set_entry(&current, &spec)?;
                    stats.files += 1;
                }
                EntryKind::Directory => {
                    let spec = AccessEntry::new(identity, Permission::All, true).spec();
                    setter.set_entry(&current, &spec)?;
                    stats.directories += 1;
                    pending.push(join_path(&current, &child.name));
                }
                EntryKind::Other(kind) => {
                    return Err(GrantError::UnsupportedEntryKind {
                        kind,
                        path: join_path(&current, &child.name),
                    });
                }
            }
        }
    }

    Ok(stats)
}
