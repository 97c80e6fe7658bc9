//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::hit_event::HitEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::name_generator::is_valid_name;

/// Redirects a short name to its target URL.
///
/// # Endpoint
///
/// `GET /api/v1/{name}`
///
/// # Request Flow
///
/// 1. Validate the path parameter
/// 2. Look up the newest live record for the name
/// 3. Queue a hit event for the background worker
/// 4. Return 307 Temporary Redirect
///
/// # Usage Tracking
///
/// The hit event is pushed with `try_send` and the response never waits on
/// the stats write. A full queue drops the event.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed name and 404 Not Found when no
/// live record exists (lookup failures included).
pub async fn redirect_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !is_valid_name(&name) {
        return Err(AppError::validation("Invalid url parameter"));
    }

    let link = state.registry.resolve(&name).await?;

    let _ = state.hit_tx.try_send(HitEvent::new(link.id));

    Ok(Redirect::temporary(&link.url))
}
