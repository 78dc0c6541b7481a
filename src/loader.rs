//! Feeds already-fetched list entries into a cache group.

use crate::cache::GroupedCache;
use crate::error::CacheError;
use tracing::{info, warn};

/// Outcome counts for one [`populate`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Distinct entries stored; equals the published group's element count.
    pub accepted: usize,
    /// Accepted entries equal to one already staged.
    pub duplicates: usize,
    /// Entries whose shape doesn't belong to the cache's discipline.
    pub rejected: usize,
    /// Entries that had the right shape but failed to compile.
    pub invalid: usize,
}

/// Replaces the contents of `group` with `entries`.
///
/// Invalid entries are logged and skipped; the group is published either way.
pub fn populate<I, S>(cache: &dyn GroupedCache, group: &str, entries: I) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();
    let mut factory = cache.refresh(group);

    for entry in entries {
        let entry = entry.as_ref();
        match factory.add_entry(entry) {
            Ok(true) if factory.count() > report.accepted => report.accepted += 1,
            Ok(true) => report.duplicates += 1,
            Ok(false) => report.rejected += 1,
            Err(CacheError::Pattern(e)) => {
                warn!("Skipping entry in group '{}': {}", group, e);
                report.invalid += 1;
            }
            Err(e) => {
                warn!("Stopped loading group '{}': {}", group, e);
                break;
            }
        }
    }

    factory.finish();

    info!(
        "Loaded group '{}': {} accepted, {} duplicates, {} rejected, {} invalid",
        group,
        report.accepted,
        report.duplicates,
        report.rejected,
        report.invalid
    );
    report
}
