//! Shared types for the dhobi workspace
//!
//! Common types used by the shop server and the civic client: domain models,
//! the unified error system, id/time utilities and (behind the `store`
//! feature) the local key-value store with its JSON collections.

pub mod error;
pub mod models;
pub mod util;

#[cfg(feature = "store")]
pub mod store;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
