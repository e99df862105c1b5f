//! Order API

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/by-age", get(handler::by_age))
        .route("/{id}/complete", post(handler::complete))
        .route("/{id}", delete(handler::delete))
}
