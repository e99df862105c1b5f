//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{Customer, CustomerBalance, NewPayment, Payment, PaymentType};

use crate::billing::{self, bill_for};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WhatsAppLink {
    pub url: String,
    pub message: String,
}

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.shop.customers()?))
}

/// GET /api/customers/{id}/balance
pub async fn balance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerBalance>> {
    Ok(Json(state.shop.customer_balance(&id)?))
}

/// GET /api/customers/{id}/payments
pub async fn payments(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    // 404 for unknown customers rather than an empty history
    state.shop.customer(&id)?;
    Ok(Json(state.shop.payments_by_customer(&id)?))
}

/// POST /api/customers/{id}/payments
pub async fn record_payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<Json<Payment>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    let payment = state
        .shop
        .record_payment(
            &id,
            NewPayment {
                amount: payload.amount,
                kind: payload.kind,
                notes: payload.notes,
            },
        )
        .await?;
    Ok(Json(payment))
}

/// GET /api/customers/{id}/bill
pub async fn bill(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let bill = bill_for(&state.shop, &id)?;
    let html = billing::render_html(&state.config.shop_name, &bill);
    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&bill.file_name())
    );
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Html(html)))
}

/// GET /api/customers/{id}/whatsapp
pub async fn whatsapp(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<WhatsAppLink>> {
    let bill = bill_for(&state.shop, &id)?;
    let message = billing::whatsapp_message(&state.config.shop_name, &bill);
    let url = billing::whatsapp_url(&bill.customer.phone, &message);
    Ok(Json(WhatsAppLink { url, message }))
}
