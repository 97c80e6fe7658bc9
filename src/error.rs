//! Application error type and HTTP response mapping.
//!
//! Every error message here is a literal part of the public API contract and
//! must not be reworded.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing request input.
    #[error("{0}")]
    Validation(String),

    /// The requested short name is held by a live record.
    #[error("Sorry, that name is already taken")]
    NameTaken,

    /// No live record exists for the requested name.
    #[error("Sorry, there's no url with that name")]
    NotFound,

    /// The name/key pair matched nothing. Covers both an unknown name and a
    /// wrong key, without distinguishing the two.
    #[error("Sorry, that name/key combination didn't work")]
    Authorization,

    /// The backing store rejected a write.
    #[error("Sorry, there was an error saving your url")]
    Persistence,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status for this error.
    ///
    /// Authorization failures return 400 rather than 401; the wire contract
    /// predates this crate and clients depend on it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "httpCode")]
    http_code: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            http_code: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        AppError::Persistence
    }
}

/// Reports only the first failed rule, mirroring the original first-error-only
/// response shape.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|field| field.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_everything_else_maps_to_400() {
        for err in [
            AppError::validation("bad input"),
            AppError::NameTaken,
            AppError::Authorization,
            AppError::Persistence,
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_contract_messages() {
        assert_eq!(
            AppError::NameTaken.to_string(),
            "Sorry, that name is already taken"
        );
        assert_eq!(
            AppError::NotFound.to_string(),
            "Sorry, there's no url with that name"
        );
        assert_eq!(
            AppError::Authorization.to_string(),
            "Sorry, that name/key combination didn't work"
        );
        assert_eq!(
            AppError::Persistence.to_string(),
            "Sorry, there was an error saving your url"
        );
    }
}
