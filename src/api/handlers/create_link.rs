//! Handler for the link creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/v1`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "name": "my-link",              // optional
///   "secondsUntilExpiration": 3600  // optional, 0 = never expires
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "httpCode": 200,
///   "key": "6f1c76f5-6880-45aa-9653-eb57c0e4f897",
///   "name": "my-link",
///   "secondsUntilExpiration": 3600
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid input, a taken name, or a store
/// write failure.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::validation("Request must contain a valid url"))?;

    let created = state
        .registry
        .create(url, payload.name, payload.seconds_until_expiration)
        .await?;

    Ok(Json(CreateLinkResponse {
        http_code: 200,
        key: created.key.to_string(),
        name: created.name,
        seconds_until_expiration: created.seconds_until_expiration,
    }))
}
