//! Cache expiration policy.

use chrono::{DateTime, Duration, Utc};

const MAX_CACHE_AGE_DAYS: i64 = 7;

/// Decides whether a snapshot saved at some instant may still be served.
///
/// Holds no clock of its own: the caller passes the instant to validate
/// against, so the outcome is fully determined by its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedCachePolicy {
    max_age: Duration,
}

impl Default for FeedCachePolicy {
    fn default() -> Self {
        Self { max_age: Duration::days(MAX_CACHE_AGE_DAYS) }
    }
}

impl FeedCachePolicy {
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Returns true while `date` is strictly before `timestamp + max_age`.
    ///
    /// A timestamp whose expiry is not representable is treated as invalid.
    pub fn validate(&self, timestamp: DateTime<Utc>, against: DateTime<Utc>) -> bool {
        match timestamp.checked_add_signed(self.max_age) {
            Some(expires_at) => against < expires_at,
            None => false,
        }
    }
}
