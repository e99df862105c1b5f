//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use shared::models::{NewOrder, Order};

use crate::analytics::OrdersByAge;
use crate::core::ServerState;
use crate::shop::OrderFilter;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PHONE_LEN, MAX_URL_LEN, validate_request, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub status: OrderFilter,
}

/// Manual order entry
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    #[serde(default)]
    #[validate(length(max = MAX_PHONE_LEN))]
    pub customer_phone: String,
    pub quantity: u32,
    #[serde(default)]
    pub rate_per_item: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = MAX_URL_LEN))]
    pub photo_url: Option<String>,
}

/// GET /api/orders?status=all|pending|completed
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.shop.orders(query.status)?))
}

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    validate_request(&payload)?;
    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    let order = state
        .shop
        .record_order(NewOrder {
            customer_name: payload.customer_name,
            customer_phone: payload.customer_phone,
            quantity: payload.quantity,
            rate_per_item: payload.rate_per_item,
            photo_url: payload.photo_url,
        })
        .await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/complete
pub async fn complete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.shop.complete_order(&id).await?))
}

/// DELETE /api/orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.shop.delete_order(&id).await? {
        return Err(AppError::order_not_found(id));
    }
    Ok(Json(true))
}

/// GET /api/orders/by-age
pub async fn by_age(State(state): State<ServerState>) -> AppResult<Json<OrdersByAge>> {
    Ok(Json(state.shop.orders_by_age()?))
}
