//! Short link entity: a named, expiring URL mapping with usage counters.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

/// A short-name → URL mapping with its secret key and usage statistics.
///
/// Several records may exist for the same `name` over time; only the newest
/// one whose `expiration_date` has not passed is considered live.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Secret credential for update/delete, generated once at creation.
    pub key: Uuid,
    pub expiration_date: DateTime<Utc>,
    pub hits: i64,
    pub last_used: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Returns true if the record's expiry time has passed.
    pub fn is_expired(&self) -> bool {
        self.expiration_date < Utc::now()
    }
}

/// Input data for inserting a new short link.
///
/// `hits` and `last_used` start at their store defaults (0 and now).
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub name: String,
    pub url: String,
    pub key: Uuid,
    pub expiration_date: DateTime<Utc>,
}

/// Partial update applied to a record. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct ShortLinkPatch {
    pub url: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Sentinel expiry for records that never expire.
pub fn never_expires() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(9999, 1, 1, 1, 1, 1).unwrap()
}

/// Converts a requested lifetime in seconds into a concrete expiry timestamp.
///
/// Zero means "never expires" and maps to the far-future sentinel rather than
/// an absent expiry. Lifetimes too large to represent saturate to the same
/// sentinel.
pub fn expiration_from_seconds(seconds: i64) -> DateTime<Utc> {
    if seconds == 0 {
        return never_expires();
    }

    Duration::try_seconds(seconds)
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .unwrap_or_else(never_expires)
}
