//! DTOs for the link update endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `PUT /api/v1`.
///
/// `key` and `name` identify and authorize the record; at least one of
/// `url` / `seconds_until_expiration` must be present (enforced by the
/// registry, with its own message).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    /// Secret key issued at creation. Must be a version-4 UUID string.
    #[validate(
        required(message = "Request must contain a valid key"),
        custom(function = "crate::utils::validation::validate_key_format")
    )]
    pub key: Option<String>,

    /// Short name of the record to update.
    #[validate(
        required(message = "Request must contain a valid name"),
        regex(
            path = "*crate::api::dto::NAME_REGEX",
            message = "Request must contain a valid name"
        )
    )]
    pub name: Option<String>,

    /// New redirect target.
    #[validate(url(message = "The url parameter, which is optional, must be a valid url"))]
    pub url: Option<String>,

    /// New lifetime in seconds from now; `0` clears expiry.
    #[validate(range(
        min = 0,
        message = "The secondsUntilExpiration parameter, which is optional, must be a positive integer"
    ))]
    pub seconds_until_expiration: Option<i64>,
}

/// Response body for a successful update: only the fields that were written.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkResponse {
    pub http_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}
