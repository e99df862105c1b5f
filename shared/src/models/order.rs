//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Patch, Record};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// A batch of garments handed in by one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub quantity: u32,
    pub rate_per_item: Decimal,
    /// Always `quantity * rate_per_item`
    pub total_amount: Decimal,
    /// Photo reference (data URL or path) when the order came from the camera
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: OrderStatus,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

impl Record for Order {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Order creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub quantity: u32,
    /// Falls back to the shop's configured rate when absent
    #[serde(default)]
    pub rate_per_item: Option<Decimal>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial order update
///
/// Orders only ever change status and completion time after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl OrderUpdate {
    /// Mark completed at the given instant
    pub fn completed(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(OrderStatus::Completed),
            completed_at: Some(at),
        }
    }
}

impl Patch<Order> for OrderUpdate {
    fn apply_to(self, target: &mut Order) {
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(completed_at) = self.completed_at {
            target.completed_at = Some(completed_at);
        }
    }
}
