use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

use crate::acl::IdentityKind;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the data-lake account to grant access on.
    #[arg(required = true)]
    pub account: String,

    /// Object id (UUID) of the user or group being granted access.
    #[arg(required = true)]
    pub identity: Uuid,

    /// Whether the identity is a user or a security group.
    #[arg(required = true, value_enum)]
    pub kind: EntityKind,

    /// Walk the entire account synchronously instead of granting the
    /// well-known job-service paths and propagating in the background.
    #[arg(long)]
    pub full_replication: bool,

    /// Host directory where the lake account's filesystem is mounted.
    #[arg(long, default_value = "/")]
    pub mount: PathBuf,

    /// Record and print the entries that would be applied without touching
    /// any ACLs.
    #[arg(long)]
    pub dry_run: bool,
}

/// Kind of grantee identity, as spelled on the command line.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// An individual user account.
    User,
    /// A security group.
    Group,
}

impl From<EntityKind> for IdentityKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::User => IdentityKind::User,
            EntityKind::Group => IdentityKind::Group,
        }
    }
}

/// Parses command-line arguments using `clap` and returns them.
///
/// This is the main entry point for the CLI logic.
pub fn run() -> Result<Args, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args)
}
