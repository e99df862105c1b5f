//! Photo API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/photo/count | POST | garment count and price from detector predictions |

use axum::{Json, Router, extract::State, routing::post};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::photo::{DetectionResult, Prediction, calculate_cost, count_clothing};
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/photo/count", post(count))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRequest {
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub rate_per_item: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    #[serde(flatten)]
    pub detection: DetectionResult,
    pub rate_per_item: Decimal,
    pub estimated_cost: Decimal,
}

async fn count(
    State(state): State<ServerState>,
    Json(payload): Json<CountRequest>,
) -> AppResult<Json<CountResponse>> {
    let rate = payload.rate_per_item.unwrap_or(state.shop.default_rate());
    if rate.is_sign_negative() {
        return Err(AppError::validation(format!(
            "rate must be non-negative, got {rate}"
        )));
    }
    let detection = count_clothing(&payload.predictions);
    let estimated_cost = calculate_cost(detection.count, rate);
    Ok(Json(CountResponse {
        detection,
        rate_per_item: rate,
        estimated_cost,
    }))
}
