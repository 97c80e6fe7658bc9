//! API route configuration.

use crate::api::handlers::{
    create_link_handler, redirect_handler, remove_link_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

/// Registry routes, mounted under the versioned base path.
///
/// # Endpoints
///
/// - `POST   /`       - Create a short link
/// - `PUT    /`       - Update a link, authorized by its name/key pair
/// - `DELETE /`       - Remove a link, authorized by its name/key pair
/// - `GET    /{name}` - Resolve a name and redirect (HTTP 307)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_link_handler)
                .put(update_link_handler)
                .delete(remove_link_handler),
        )
        .route("/{name}", get(redirect_handler))
}
