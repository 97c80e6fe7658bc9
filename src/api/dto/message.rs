//! Generic message envelope for informational responses.

use serde::Serialize;

/// `{httpCode, message}` body used by the liveness endpoint and
/// delete-success responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub http_code: u16,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            http_code: 200,
            message: message.into(),
        }
    }
}
