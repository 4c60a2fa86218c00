//! Grant orchestration.
//!
//! Default mode stitches the two walks together: grant the well-known
//! job-service paths that exist (fire-and-forget, one background task per
//! path), then launch a single background task that propagates the grant
//! through the whole system tree. Full-replication mode skips the shortcut
//! list and walks the entire account synchronously.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::acl::{apply_entry, Identity, Permission};
use crate::locate::locate_date_chain;
use crate::propagate::{propagate, PropagateStats};
use crate::provider::{AclSetter, DirectoryProvider};
use crate::tasks::{self, TaskHandle};
use crate::GrantError;

/// Root of the background propagation walk in default mode.
pub const SYSTEM_ROOT: &str = "/system";

/// Root of the full-replication walk.
pub const ACCOUNT_ROOT: &str = "/";

/// Where the job service writes its date-bucketed run logs.
pub const JOB_LOG_ROOT: &str = "/system/jobservice/jobs/Usql";

/// Well-known folders the job and compilation services need reachable.
pub const WELL_KNOWN_PATHS: &[&str] = &[
    "/",
    "/system",
    "/system/jobservice",
    "/system/jobservice/jobs",
    JOB_LOG_ROOT,
    "/system/compilationService",
    "/system/compilationService/jobs",
];

/// Account session carried into every background task by value, so each task
/// holds its own copy and nothing shares a mutable session object.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub account: String,
}

impl SessionContext {
    pub fn new(account: impl Into<String>) -> Self {
        Self { account: account.into() }
    }
}

/// What a default-mode grant launched.
///
/// The per-path tasks are fire-and-forget with no ordering guarantee among
/// them and no barrier before the propagation task starts; they are collected
/// here rather than dropped so a caller can still inspect or await them.
pub struct GrantOutcome {
    pub path_tasks: Vec<TaskHandle>,
    pub propagation: TaskHandle,
}

/// Default mode: grant the well-known paths plus today's log partition chain,
/// then launch the full propagation from [`SYSTEM_ROOT`] in the background.
///
/// Returns as soon as the propagation task is launched. Provider and setter
/// errors from the synchronous part (existence probes, date-chain listing)
/// surface here; errors inside the background tasks surface when their
/// handles are waited on.
pub fn grant<P, S>(
    provider: Arc<P>,
    setter: Arc<S>,
    session: SessionContext,
    identity: Identity,
    now: DateTime<Utc>,
) -> Result<GrantOutcome, GrantError>
where
    P: DirectoryProvider + 'static,
    S: AclSetter + 'static,
{
    let mut candidates: Vec<String> = WELL_KNOWN_PATHS.iter().map(|p| p.to_string()).collect();
    candidates.extend(locate_date_chain(provider.as_ref(), JOB_LOG_ROOT, now)?);

    let mut path_tasks = Vec::new();
    for path in &candidates {
        if !provider.exists(path)? {
            debug!(account = %session.account, path = %path, "skipping missing path");
            continue;
        }
        info!(account = %session.account, path = %path, "granting well-known path");
        path_tasks.push(apply_entry(
            Arc::clone(&setter),
            path,
            identity,
            Permission::All,
            true,
        ));
    }

    let task_session = session.clone();
    let propagation = tasks::submit(move || {
        let stats = propagate(provider.as_ref(), setter.as_ref(), SYSTEM_ROOT, identity)?;
        info!(
            account = %task_session.account,
            directories = stats.directories,
            files = stats.files,
            "background propagation finished"
        );
        Ok(())
    });

    Ok(GrantOutcome { path_tasks, propagation })
}

/// Full-replication mode: walk the entire account from [`ACCOUNT_ROOT`],
/// blocking until every entry has been applied.
pub fn replicate_all<P, S>(
    provider: &P,
    setter: &S,
    session: &SessionContext,
    identity: Identity,
) -> Result<PropagateStats, GrantError>
where
    P: DirectoryProvider + ?Sized,
    S: AclSetter + ?Sized,
{
    info!(account = %session.account, "full replication requested, walking the whole account");
    propagate(provider, setter, ACCOUNT_ROOT, identity)
}
