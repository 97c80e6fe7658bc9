//! Handler for the link update endpoint.

use axum::{Json, extract::State};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::update_link::{UpdateLinkRequest, UpdateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Updates the target URL and/or expiry of an existing short link.
///
/// # Endpoint
///
/// `PUT /api/v1`
///
/// # Request Body
///
/// ```json
/// {
///   "key": "6f1c76f5-6880-45aa-9653-eb57c0e4f897",
///   "name": "my-link",
///   "url": "https://example.com/new-target",  // at least one of url /
///   "secondsUntilExpiration": 0               // secondsUntilExpiration
/// }
/// ```
///
/// # Response
///
/// Echoes the fields that were written:
///
/// ```json
/// {"httpCode": 200, "url": "https://example.com/new-target"}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid input or when the name/key pair
/// matched nothing.
pub async fn update_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<UpdateLinkResponse>, AppError> {
    payload.validate()?;

    let key = parse_key(payload.key.as_deref())?;
    let name = payload
        .name
        .ok_or_else(|| AppError::validation("Request must contain a valid name"))?;

    let applied = state
        .registry
        .update(&name, key, payload.url, payload.seconds_until_expiration)
        .await?;

    Ok(Json(UpdateLinkResponse {
        http_code: 200,
        url: applied.url,
        expiration_date: applied.expiration_date,
    }))
}

/// Parses the already shape-validated key string.
pub(super) fn parse_key(key: Option<&str>) -> Result<Uuid, AppError> {
    key.and_then(|k| Uuid::try_parse(k).ok())
        .ok_or_else(|| AppError::validation("Request must contain a valid key"))
}
