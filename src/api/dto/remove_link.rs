//! DTO for the link removal endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `DELETE /api/v1`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLinkRequest {
    /// Secret key issued at creation. Must be a version-4 UUID string.
    #[validate(
        required(message = "Request must contain a valid key"),
        custom(function = "crate::utils::validation::validate_key_format")
    )]
    pub key: Option<String>,

    /// Short name of the record to remove.
    #[validate(
        required(message = "Request must contain a valid name"),
        regex(
            path = "*crate::api::dto::NAME_REGEX",
            message = "Request must contain a valid name"
        )
    )]
    pub name: Option<String>,
}
