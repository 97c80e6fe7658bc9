//! Business logic services.

pub mod registry_service;

pub use registry_service::{AppliedUpdate, CreatedLink, DEFAULT_TTL_SECONDS, RegistryService};
