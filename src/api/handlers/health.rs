//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::message::MessageResponse;

/// Liveness/info endpoint.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {"httpCode": 200, "message": "Yay!"}
/// ```
pub async fn health_handler() -> Json<MessageResponse> {
    Json(MessageResponse::ok("Yay!"))
}
