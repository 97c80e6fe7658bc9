//! Request and response DTOs.
//!
//! Validation messages on the request DTOs are literal API contract strings;
//! response DTOs always carry `httpCode` mirroring the HTTP status.

pub mod create_link;
pub mod message;
pub mod remove_link;
pub mod update_link;

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for short name validation.
pub static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());
