//! Data maintenance API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/data | DELETE | remove all orders, customers and payments |

use axum::{Json, Router, extract::State, routing::delete};

use shared::ApiResponse;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/data", delete(clear_all))
}

async fn clear_all(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<()>>> {
    state.shop.clear_all_data().await?;
    Ok(Json(ApiResponse::ok()))
}
