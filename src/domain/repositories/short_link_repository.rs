//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for short link records.
///
/// Mutations are equality-filtered on the `(name, key)` pair in a single
/// round trip; there is no separate verify step, so there is no check/use
/// window between authorization and the write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new short link record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store rejects the write.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds the most recently created record with this name whose expiry has
    /// not passed.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if a live record exists
    /// - `Ok(None)` if every record with this name is expired or absent
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn find_active_by_name(&self, name: &str) -> Result<Option<ShortLink>, AppError>;

    /// Applies a patch to the records matching exactly `(name, key)`.
    ///
    /// Returns `Ok(false)` when nothing matched; the caller cannot tell an
    /// unknown name from a wrong key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn update_by_name_and_key(
        &self,
        name: &str,
        key: Uuid,
        patch: ShortLinkPatch,
    ) -> Result<bool, AppError>;

    /// Removes the records matching exactly `(name, key)`.
    ///
    /// Returns `Ok(false)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn delete_by_name_and_key(&self, name: &str, key: Uuid) -> Result<bool, AppError>;

    /// Increments the hit counter and refreshes `last_used` for one record.
    ///
    /// Called from the background hit worker only; failures are dropped by
    /// the caller.
    async fn record_hit(&self, id: i64) -> Result<(), AppError>;
}
