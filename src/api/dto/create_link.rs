//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/v1`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Redirect target. Required.
    #[validate(
        required(message = "Request must contain a valid url"),
        url(message = "Request must contain a valid url")
    )]
    pub url: Option<String>,

    /// Explicit short name. Generated server-side when absent.
    #[validate(regex(
        path = "*crate::api::dto::NAME_REGEX",
        message = "The name parameter, which is optional, may only contain lowercase letters, numbers, and hyphens"
    ))]
    pub name: Option<String>,

    /// Lifetime in seconds. Defaults to one week; `0` means never expires.
    #[validate(range(
        min = 0,
        message = "The secondsUntilExpiration parameter, which is optional, must be a positive integer"
    ))]
    pub seconds_until_expiration: Option<i64>,
}

/// Response body for a successful create.
///
/// `seconds_until_expiration` echoes the requested lifetime (or the default),
/// `key` is the canonical hyphenated UUID the caller needs for later
/// mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub http_code: u16,
    pub key: String,
    pub name: String,
    pub seconds_until_expiration: i64,
}
