//! Date-bucket locator.
//!
//! Job logs land under a directory-per-time-unit layout
//! (`<root>/<year>/<month>/<day>/<hour>/<minute>`). Finding "the partition
//! closest to now" means descending level by level, at each level taking the
//! numerically largest child folder whose name is ≤ the level's bound.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use crate::provider::{join_path, DirectoryProvider};
use crate::GrantError;

/// Pick the numerically largest child of `root` whose name is ≤ `bound`.
///
/// Three distinct outcomes, and the distinction matters to callers:
/// - `root` is empty or does not exist → `Ok(None)` (absent, stops a chain);
/// - a qualifying child exists → `Ok(Some(path))`, joined with `/`;
/// - `root` exists but no child qualifies →
///   [`GrantError::NoQualifyingChild`], a hard failure.
pub fn locate_closest<P>(provider: &P, root: &str, bound: u32) -> Result<Option<String>, GrantError>
where
    P: DirectoryProvider + ?Sized,
{
    if root.is_empty() || !provider.exists(root)? {
        return Ok(None);
    }

    let mut numbered: Vec<u32> = provider
        .list_children(root)?
        .iter()
        .filter_map(|entry| entry.name.parse::<u32>().ok())
        .collect();
    numbered.sort_unstable_by(|a, b| b.cmp(a));

    match numbered.into_iter().find(|value| *value <= bound) {
        Some(value) => Ok(Some(join_path(root, &value.to_string()))),
        None => Err(GrantError::NoQualifyingChild { bound, path: root.to_string() }),
    }
}

/// Walk the date-bucket hierarchy under `root` toward `now`.
///
/// Chains [`locate_closest`] with bounds year, month, day, then the fixed
/// hour (24) and minute (59) bucket caps, each step rooted at the previous
/// result. Stops at the first absent step, so the result is always a prefix
/// of the five levels — possibly empty when `root` itself does not exist.
pub fn locate_date_chain<P>(
    provider: &P,
    root: &str,
    now: DateTime<Utc>,
) -> Result<Vec<String>, GrantError>
where
    P: DirectoryProvider + ?Sized,
{
    let bounds = [now.year() as u32, now.month(), now.day(), 24, 59];
    let mut chain = Vec::with_capacity(bounds.len());
    let mut current = root.to_string();

    for bound in bounds {
        match locate_closest(provider, &current, bound)? {
            Some(path) => {
                debug!(path = %path, bound, "date-bucket step");
                chain.push(path.clone());
                current = path;
            }
            None => break,
        }
    }

    Ok(chain)
}
