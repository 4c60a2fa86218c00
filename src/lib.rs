//! # lakegrant Core Library
//!
//! This crate provides the core functionality for the `lakegrant`
//! administrative tool, which grants a user or security-group identity
//! read/write/execute ACLs across a data-lake account's folder tree.
//!
//! It is designed to be used by the `lakegrant` command-line application, but
//! its public API can also be used to drive grants programmatically against
//! any [`provider::DirectoryProvider`] / [`provider::AclSetter`] pair.
//!
//! ## Key Modules
//!
//! - [`locate`]: Finds the date-bucketed job-log partition closest to now.
//! - [`propagate`]: Walks the tree applying entries, defaults before descent.
//! - [`acl`]: Identities, permissions, and the textual entry grammar.
//! - [`orchestrate`]: Ties the walks together into the two grant modes.
//! - [`tasks`]: The thread-backed background task runtime.
//! - [`provider`]: Backing-store seams plus the local and in-memory backends.

pub mod acl;
pub mod cli;
pub mod error;
pub use error::GrantError;

pub mod locate;
pub mod orchestrate;
pub mod propagate;
pub mod provider;
pub mod tasks;
