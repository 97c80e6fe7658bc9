//! HTTP request handlers for API endpoints.

pub mod create_link;
pub mod health;
pub mod redirect;
pub mod remove_link;
pub mod update_link;

pub use create_link::create_link_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use remove_link::remove_link_handler;
pub use update_link::update_link_handler;
