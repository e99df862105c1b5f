//! Analytics API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/analytics?timeframe=today\|week\|month | GET | order statistics |

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::analytics::{OrderStats, Timeframe};
use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/analytics", get(stats))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub timeframe: Timeframe,
}

async fn stats(
    State(state): State<ServerState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<OrderStats>> {
    Ok(Json(state.shop.analytics(query.timeframe)?))
}
