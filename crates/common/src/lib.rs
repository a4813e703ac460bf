//! Shared types for the data endpoint service.
//!
//! Holds the JSON payload served by `GET /api/data` and the fixed
//! messages each deployment variant answers with.

pub mod types;

pub use types::{BUS_APP_MESSAGE, DataPayload, ParseVariantError, SPRING_MESSAGE, Variant};
