//! Short-link lifecycle service: create, resolve, update, remove.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch, expiration_from_seconds};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::name_generator::{generate_name, is_valid_name};

/// Lifetime applied when the caller does not request one: one week.
pub const DEFAULT_TTL_SECONDS: i64 = 604_800;

/// Collision-loop bound for generated names.
const MAX_NAME_ATTEMPTS: usize = 10;

const MSG_INVALID_URL: &str = "Request must contain a valid url";
const MSG_INVALID_NAME: &str =
    "The name parameter, which is optional, may only contain lowercase letters, numbers, and hyphens";
const MSG_INVALID_SECONDS: &str =
    "The secondsUntilExpiration parameter, which is optional, must be a positive integer";
const MSG_INVALID_OPTIONAL_URL: &str = "The url parameter, which is optional, must be a valid url";
const MSG_NO_UPDATE_FIELDS: &str =
    "You must include either a url or a secondsUntilExpiration with this request";

/// Result of a successful create: what the caller needs to use and later
/// mutate the link.
///
/// `seconds_until_expiration` echoes the requested lifetime (or the applied
/// default), not a value recomputed from the stored expiry.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub name: String,
    pub key: Uuid,
    pub seconds_until_expiration: i64,
}

/// Fields actually written by an update, echoed back to the caller.
#[derive(Debug, Clone)]
pub struct AppliedUpdate {
    pub url: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Service owning the record lifecycle of short links.
///
/// Handlers stay thin; every rule about names, keys, expiry, and authorized
/// mutation lives here, against the repository trait.
pub struct RegistryService {
    repository: Arc<dyn ShortLinkRepository>,
}

impl RegistryService {
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - redirect target, must be a syntactically valid URL
    /// - `name` - optional explicit short name; generated when absent
    /// - `seconds_until_expiration` - optional lifetime; defaults to one
    ///   week, `0` means the link never expires
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input,
    /// [`AppError::NameTaken`] if a live record already holds the requested
    /// name, and [`AppError::Persistence`] if the store rejects the insert.
    pub async fn create(
        &self,
        url: String,
        name: Option<String>,
        seconds_until_expiration: Option<i64>,
    ) -> Result<CreatedLink, AppError> {
        if Url::parse(&url).is_err() {
            return Err(AppError::validation(MSG_INVALID_URL));
        }

        let seconds = seconds_until_expiration.unwrap_or(DEFAULT_TTL_SECONDS);
        if seconds < 0 {
            return Err(AppError::validation(MSG_INVALID_SECONDS));
        }

        let name = match name {
            Some(name) => {
                if !is_valid_name(&name) {
                    return Err(AppError::validation(MSG_INVALID_NAME));
                }

                // Only live records block a name; expired and deleted ones
                // leave it free to re-register.
                if self.repository.find_active_by_name(&name).await?.is_some() {
                    return Err(AppError::NameTaken);
                }

                name
            }
            None => self.generate_unique_name().await?,
        };

        let key = Uuid::new_v4();
        let expiration_date = expiration_from_seconds(seconds);

        let link = self
            .repository
            .insert(NewShortLink {
                name,
                url,
                key,
                expiration_date,
            })
            .await?;

        tracing::info!(name = %link.name, "short link created");

        Ok(CreatedLink {
            name: link.name,
            key,
            seconds_until_expiration: seconds,
        })
    }

    /// Resolves a name to its live record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no live record exists. Lookup
    /// failures surface the same way as a missing record.
    pub async fn resolve(&self, name: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_active_by_name(name)
            .await
            .ok()
            .flatten()
            .ok_or(AppError::NotFound)
    }

    /// Updates the record matching exactly `(name, key)`.
    ///
    /// At least one of `url` / `seconds_until_expiration` must be provided;
    /// a lifetime of `0` clears expiry by setting the far-future sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or missing input and
    /// [`AppError::Authorization`] when the pair matched nothing (or the
    /// store failed) — an unknown name and a wrong key are indistinguishable.
    pub async fn update(
        &self,
        name: &str,
        key: Uuid,
        url: Option<String>,
        seconds_until_expiration: Option<i64>,
    ) -> Result<AppliedUpdate, AppError> {
        if url.is_none() && seconds_until_expiration.is_none() {
            return Err(AppError::validation(MSG_NO_UPDATE_FIELDS));
        }

        if let Some(url) = &url
            && Url::parse(url).is_err()
        {
            return Err(AppError::validation(MSG_INVALID_OPTIONAL_URL));
        }

        if let Some(seconds) = seconds_until_expiration
            && seconds < 0
        {
            return Err(AppError::validation(MSG_INVALID_SECONDS));
        }

        let expiration_date = seconds_until_expiration.map(expiration_from_seconds);

        let patch = ShortLinkPatch {
            url: url.clone(),
            expiration_date,
        };

        let matched = self
            .repository
            .update_by_name_and_key(name, key, patch)
            .await
            .map_err(|_| AppError::Authorization)?;

        if !matched {
            return Err(AppError::Authorization);
        }

        Ok(AppliedUpdate {
            url,
            expiration_date,
        })
    }

    /// Removes the record matching exactly `(name, key)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authorization`] when the pair matched nothing or
    /// the store failed, same as [`Self::update`].
    pub async fn remove(&self, name: &str, key: Uuid) -> Result<(), AppError> {
        let matched = self
            .repository
            .delete_by_name_and_key(name, key)
            .await
            .map_err(|_| AppError::Authorization)?;

        if !matched {
            return Err(AppError::Authorization);
        }

        tracing::info!(name, "short link removed");

        Ok(())
    }

    /// Generates a name not currently held by any live record.
    ///
    /// Regenerates on collision, bounded at [`MAX_NAME_ATTEMPTS`].
    async fn generate_unique_name(&self) -> Result<String, AppError> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = generate_name();

            if self
                .repository
                .find_active_by_name(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        tracing::error!("exhausted name generation attempts");
        Err(AppError::Persistence)
    }
}
