//! Explicit roster snapshot cache.
//!
//! The cache is a plain object owned by the calling layer — there is no
//! process-wide state. The caller decides the refresh policy up front and
//! may drop the snapshot at any time with [`RosterCache::invalidate`].

use std::time::{Duration, Instant};

use kolmatch_core::ReferenceRecord;

use crate::client::RosterClient;
use crate::error::RosterError;

/// When a cached roster snapshot stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Serve the snapshot until [`RosterCache::invalidate`] is called.
    KeepUntilInvalidated,
    /// Serve the snapshot for at most this long, then refetch on demand.
    Ttl(Duration),
}

impl RefreshPolicy {
    /// Maps the optional TTL configuration value onto a policy.
    #[must_use]
    pub fn from_ttl_secs(ttl_secs: Option<u64>) -> Self {
        match ttl_secs {
            Some(secs) => RefreshPolicy::Ttl(Duration::from_secs(secs)),
            None => RefreshPolicy::KeepUntilInvalidated,
        }
    }
}

#[derive(Debug)]
struct CachedRoster {
    fetched_at: Instant,
    records: Vec<ReferenceRecord>,
}

/// Caches one roster snapshot between classification runs.
#[derive(Debug)]
pub struct RosterCache {
    policy: RefreshPolicy,
    snapshot: Option<CachedRoster>,
}

impl RosterCache {
    #[must_use]
    pub fn new(policy: RefreshPolicy) -> Self {
        RosterCache {
            policy,
            snapshot: None,
        }
    }

    /// Returns the cached snapshot when fresh, fetching (with retry) when the
    /// cache is empty or stale.
    ///
    /// # Errors
    ///
    /// Propagates [`RosterError`] from the fetch; an existing stale snapshot
    /// is kept in place when the refresh fails, so a later call may retry.
    pub async fn get_or_fetch(
        &mut self,
        client: &RosterClient,
    ) -> Result<&[ReferenceRecord], RosterError> {
        if self.has_fresh_snapshot() {
            tracing::debug!("serving roster from cache");
        } else {
            let records = client.fetch_roster_with_retry().await?;
            tracing::info!(records = records.len(), "refreshed roster snapshot");
            self.snapshot = Some(CachedRoster {
                fetched_at: Instant::now(),
                records,
            });
        }
        Ok(self
            .snapshot
            .as_ref()
            .map_or(&[], |cached| cached.records.as_slice()))
    }

    /// Drops the snapshot; the next [`RosterCache::get_or_fetch`] refetches.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    #[must_use]
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    fn has_fresh_snapshot(&self) -> bool {
        match (&self.snapshot, self.policy) {
            (None, _) => false,
            (Some(_), RefreshPolicy::KeepUntilInvalidated) => true,
            (Some(cached), RefreshPolicy::Ttl(ttl)) => cached.fetched_at.elapsed() < ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(records: Vec<ReferenceRecord>) -> CachedRoster {
        CachedRoster {
            fetched_at: Instant::now(),
            records,
        }
    }

    #[test]
    fn from_ttl_secs_none_keeps_until_invalidated() {
        assert_eq!(
            RefreshPolicy::from_ttl_secs(None),
            RefreshPolicy::KeepUntilInvalidated
        );
    }

    #[test]
    fn from_ttl_secs_some_maps_to_ttl() {
        assert_eq!(
            RefreshPolicy::from_ttl_secs(Some(900)),
            RefreshPolicy::Ttl(Duration::from_secs(900))
        );
    }

    #[test]
    fn empty_cache_is_not_fresh() {
        let cache = RosterCache::new(RefreshPolicy::KeepUntilInvalidated);
        assert!(!cache.has_fresh_snapshot());
    }

    #[test]
    fn keep_until_invalidated_snapshot_stays_fresh() {
        let mut cache = RosterCache::new(RefreshPolicy::KeepUntilInvalidated);
        cache.snapshot = Some(snapshot(Vec::new()));
        assert!(cache.has_fresh_snapshot());
    }

    #[test]
    fn invalidate_drops_the_snapshot() {
        let mut cache = RosterCache::new(RefreshPolicy::KeepUntilInvalidated);
        cache.snapshot = Some(snapshot(Vec::new()));
        cache.invalidate();
        assert!(!cache.has_fresh_snapshot());
    }

    #[test]
    fn zero_ttl_snapshot_is_immediately_stale() {
        let mut cache = RosterCache::new(RefreshPolicy::Ttl(Duration::ZERO));
        cache.snapshot = Some(snapshot(Vec::new()));
        assert!(!cache.has_fresh_snapshot());
    }

    #[test]
    fn long_ttl_snapshot_is_fresh() {
        let mut cache = RosterCache::new(RefreshPolicy::Ttl(Duration::from_secs(3600)));
        cache.snapshot = Some(snapshot(Vec::new()));
        assert!(cache.has_fresh_snapshot());
    }
}
