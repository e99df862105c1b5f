use thiserror::Error;

use shared::error::{AppError, ErrorCode};
use shared::store::StoreError;

use crate::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid amount: {0}")]
    Ledger(#[from] LedgerError),

    #[error("quantity must be between 1 and 9999, got {0}")]
    InvalidQuantity(u32),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already completed: {0}")]
    OrderAlreadyCompleted(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

pub type ShopResult<T> = Result<T, ShopError>;

impl From<ShopError> for AppError {
    fn from(err: ShopError) -> Self {
        match err {
            ShopError::Store(e) => e.into(),
            ShopError::Ledger(e) => {
                AppError::with_message(ErrorCode::PaymentInvalidAmount, e.to_string())
            }
            ShopError::InvalidQuantity(q) => AppError::with_message(
                ErrorCode::OrderInvalidQuantity,
                ShopError::InvalidQuantity(q).to_string(),
            )
            .with_detail("quantity", q),
            ShopError::InvalidRate(msg) => AppError::with_message(ErrorCode::OrderInvalidRate, msg),
            ShopError::Validation(msg) => AppError::validation(msg),
            ShopError::OrderNotFound(id) => AppError::order_not_found(id),
            ShopError::OrderAlreadyCompleted(id) => AppError::with_message(
                ErrorCode::OrderAlreadyCompleted,
                format!("Order {id} is already completed"),
            )
            .with_detail("order_id", id),
            ShopError::CustomerNotFound(id) => AppError::customer_not_found(id),
        }
    }
}
