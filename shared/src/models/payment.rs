//! Payment Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// How a payment affects the customer's balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Settles dues and counts towards total paid
    Payment,
    /// Money left in advance for future orders
    Credit,
    /// Dues written off without being counted as paid
    Refund,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Credit => "credit",
            Self::Refund => "refund",
        }
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment" => Ok(Self::Payment),
            "credit" => Ok(Self::Credit),
            "refund" => Ok(Self::Refund),
            other => Err(format!("unknown payment type: {}", other)),
        }
    }
}

/// Payment entity (immutable once stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub customer_id: String,
    /// Always > 0
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for Payment {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payment creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    #[serde(default)]
    pub notes: Option<String>,
}
