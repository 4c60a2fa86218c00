//! Local-filesystem backend.
//!
//! Maps lake paths onto a host directory (typically a FUSE or NFS mount of
//! the account) and applies entries with the platform ACL tooling. On
//! non-Unix hosts the setter reports an error instead of silently skipping;
//! listing and existence checks work everywhere.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::provider::{AclSetter, DirEntry, DirectoryProvider, EntryKind};
use crate::GrantError;

/// [`DirectoryProvider`] over a host directory standing in for the lake root.
#[derive(Debug, Clone)]
pub struct LocalFsProvider {
    mount: PathBuf,
}

impl LocalFsProvider {
    pub fn new(mount: impl Into<PathBuf>) -> Self {
        Self { mount: mount.into() }
    }

    /// Translate a `/`-separated lake path to a host path under the mount.
    fn host_path(&self, path: &str) -> PathBuf {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            self.mount.clone()
        } else {
            self.mount.join(trimmed)
        }
    }
}

impl DirectoryProvider for LocalFsProvider {
    fn exists(&self, path: &str) -> Result<bool, GrantError> {
        Ok(self.host_path(path).exists())
    }

    fn list_children(&self, path: &str) -> Result<Vec<DirEntry>, GrantError> {
        let host = self.host_path(path);
        let mut entries = Vec::new();
        let iter = std::fs::read_dir(&host)
            .map_err(|source| GrantError::Io { source, path: host.clone() })?;
        for entry in iter {
            let entry = entry.map_err(|source| GrantError::Io { source, path: host.clone() })?;
            let file_type = entry
                .file_type()
                .map_err(|source| GrantError::Io { source, path: entry.path() })?;
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other("symlink".to_string())
            };
            entries.push(DirEntry { name: entry.file_name().to_string_lossy().into_owned(), kind });
        }
        Ok(entries)
    }
}

/// [`AclSetter`] backed by the system `setfacl` utility.
///
/// Each comma-separated piece of the specifier becomes one `-m` modification;
/// pieces carrying the `default:` prefix are applied with `-d` so future
/// children inherit them.
#[derive(Debug, Clone)]
pub struct SetfaclSetter {
    mount: PathBuf,
}

impl SetfaclSetter {
    pub fn new(mount: impl Into<PathBuf>) -> Self {
        Self { mount: mount.into() }
    }

    fn host_path(&self, path: &str) -> PathBuf {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            self.mount.clone()
        } else {
            self.mount.join(trimmed)
        }
    }
}

#[cfg(not(target_os = "windows"))]
impl AclSetter for SetfaclSetter {
    fn set_entry(&self, path: &str, spec: &str) -> Result<(), GrantError> {
        let host = self.host_path(path);
        for piece in spec.split(',') {
            let (default, entry) = match piece.strip_prefix("default:") {
                Some(rest) => (true, rest),
                None => (false, piece),
            };
            run_setfacl(&host, entry, default).map_err(|message| GrantError::Setter {
                path: path.to_string(),
                message,
            })?;
        }
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
fn run_setfacl(host: &Path, entry: &str, default: bool) -> Result<(), String> {
    let mut cmd = Command::new("setfacl");
    if default {
        cmd.arg("-d");
    }
    cmd.arg("-m").arg(entry).arg(host);
    let output = cmd.output().map_err(|e| format!("failed to spawn setfacl: {}", e))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}

#[cfg(target_os = "windows")]
// POSIX ACL tooling is not available on Windows; the setter refuses rather
// than pretending the entry was applied.
impl AclSetter for SetfaclSetter {
    fn set_entry(&self, path: &str, _spec: &str) -> Result<(), GrantError> {
        let _ = &self.mount;
        Err(GrantError::Setter {
            path: path.to_string(),
            message: "POSIX ACLs are not supported on this platform".to_string(),
        })
    }
}
