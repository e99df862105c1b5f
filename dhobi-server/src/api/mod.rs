//! HTTP API
//!
//! - [`health`] - liveness
//! - [`orders`] - order list / manual entry / completion / ageing
//! - [`customers`] - balances, payments, bills
//! - [`analytics`] - order statistics
//! - [`voice`] - orders from spoken transcripts
//! - [`photo`] - garment counts from detector output
//! - [`data`] - wipe all shop data

pub mod analytics;
pub mod customers;
pub mod data;
pub mod health;
pub mod orders;
pub mod photo;
pub mod voice;

use axum::Router;

use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

/// All API routes, state not yet attached
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(customers::router())
        .merge(analytics::router())
        .merge(voice::router())
        .merge(photo::router())
        .merge(data::router())
}
