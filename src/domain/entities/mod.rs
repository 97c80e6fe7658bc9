//! Core business data structures.

pub mod short_link;

pub use short_link::{
    NewShortLink, ShortLink, ShortLinkPatch, expiration_from_seconds, never_expires,
};
