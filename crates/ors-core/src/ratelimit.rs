//! Rate-limit metadata reported by the upstream service
//!
//! Every response carries `x-ratelimit-limit`, `x-ratelimit-remaining`
//! and `x-ratelimit-reset` (epoch seconds). A limit of zero means the
//! headers were absent or unparseable, not an exhausted quota; the
//! pipeline only stores snapshots with a positive limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quota state observed on a single HTTP exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateLimitSnapshot {
    /// Total requests allowed in the current window.
    pub limit: u64,

    /// Requests left in the current window.
    pub remaining: u64,

    /// When the window resets.
    pub reset_at: DateTime<Utc>,

    /// When this snapshot was taken.
    pub observed_at: DateTime<Utc>,
}

impl RateLimitSnapshot {
    /// Build a snapshot from raw header values, stamping `observed_at`
    /// with the current time. `reset_epoch_secs` is converted to an
    /// absolute timestamp; an out-of-range value falls back to the epoch.
    pub fn from_raw(limit: u64, remaining: u64, reset_epoch_secs: i64) -> Self {
        Self {
            limit,
            remaining,
            reset_at: DateTime::from_timestamp(reset_epoch_secs, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
            observed_at: Utc::now(),
        }
    }

    /// Whether the upstream actually reported a quota on this exchange.
    pub fn is_reported(&self) -> bool {
        self.limit > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_converted_to_absolute_timestamp() {
        let snapshot = RateLimitSnapshot::from_raw(40, 0, 1_700_000_000);
        assert_eq!(snapshot.reset_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(snapshot.remaining, 0);
    }

    #[test]
    fn test_zero_limit_means_not_reported() {
        let snapshot = RateLimitSnapshot::from_raw(0, 0, 0);
        assert!(!snapshot.is_reported());

        let snapshot = RateLimitSnapshot::from_raw(40, 39, 1_700_000_000);
        assert!(snapshot.is_reported());
    }

    #[test]
    fn test_out_of_range_reset_falls_back_to_epoch() {
        let snapshot = RateLimitSnapshot::from_raw(40, 1, i64::MAX);
        assert_eq!(snapshot.reset_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_observed_at_is_recent() {
        let before = Utc::now();
        let snapshot = RateLimitSnapshot::from_raw(40, 10, 1_700_000_000);
        assert!(snapshot.observed_at >= before);
        assert!(snapshot.observed_at <= Utc::now());
    }
}
