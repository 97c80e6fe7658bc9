//! Handler for the link removal endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::remove_link::RemoveLinkRequest;
use crate::api::handlers::update_link::parse_key;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently removes a short link.
///
/// # Endpoint
///
/// `DELETE /api/v1`
///
/// # Request Body
///
/// ```json
/// {
///   "key": "6f1c76f5-6880-45aa-9653-eb57c0e4f897",
///   "name": "my-link"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {"httpCode": 200, "message": "Shortened url deleted"}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid input or when the name/key pair
/// matched nothing — including a pair that was already deleted.
pub async fn remove_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<RemoveLinkRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    let key = parse_key(payload.key.as_deref())?;
    let name = payload
        .name
        .ok_or_else(|| AppError::validation("Request must contain a valid name"))?;

    state.registry.remove(&name, key).await?;

    Ok(Json(MessageResponse::ok("Shortened url deleted")))
}
