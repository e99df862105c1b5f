//! Customer Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// Customer entity, keyed by phone number
///
/// Balance fields are only ever mutated through the ledger rules: an order
/// raises `total_due`, payments and refunds lower it (never below zero),
/// credits raise `advance_credit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub total_due: Decimal,
    pub total_paid: Decimal,
    pub advance_credit: Decimal,
    /// Order ids, oldest first
    pub orders: Vec<String>,
    /// Payment ids, oldest first
    pub payments: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_at: Option<DateTime<Utc>>,
    /// Deleted orders whose totals still stand in `total_due`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub voided_orders: Vec<VoidedOrder>,
}

/// What remains of a deleted order on its customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidedOrder {
    pub id: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// New customer with zero balances
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            total_due: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            advance_credit: Decimal::ZERO,
            orders: Vec::new(),
            payments: Vec::new(),
            created_at: Utc::now(),
            last_order_at: None,
            voided_orders: Vec::new(),
        }
    }

    /// `total_due - advance_credit`; negative when the shop owes the customer
    pub fn net_balance(&self) -> Decimal {
        self.total_due - self.advance_credit
    }
}

impl Record for Customer {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Balance summary shown for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBalance {
    pub customer_id: String,
    pub customer_name: String,
    pub total_due: Decimal,
    pub advance_credit: Decimal,
    pub net_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_at: Option<DateTime<Utc>>,
    pub order_count: usize,
}

impl From<&Customer> for CustomerBalance {
    fn from(c: &Customer) -> Self {
        Self {
            customer_id: c.id.clone(),
            customer_name: c.name.clone(),
            total_due: c.total_due,
            advance_credit: c.advance_credit,
            net_balance: c.net_balance(),
            last_order_at: c.last_order_at,
            order_count: c.orders.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_customer_has_zero_balance() {
        let c = Customer::new("cust_1", "Anita", "9876543210");
        assert_eq!(c.total_due, Decimal::ZERO);
        assert_eq!(c.net_balance(), Decimal::ZERO);
        assert!(c.orders.is_empty());
        assert!(c.last_order_at.is_none());
    }

    #[test]
    fn test_net_balance_can_be_negative() {
        let mut c = Customer::new("cust_1", "Anita", "");
        c.total_due = dec!(20);
        c.advance_credit = dec!(50);
        assert_eq!(c.net_balance(), dec!(-30));
    }

    #[test]
    fn test_balance_summary() {
        let mut c = Customer::new("cust_2", "Ravi", "");
        c.total_due = dec!(64);
        c.advance_credit = dec!(4);
        c.orders = vec!["order_1".into(), "order_2".into()];
        let b = CustomerBalance::from(&c);
        assert_eq!(b.net_balance, dec!(60));
        assert_eq!(b.order_count, 2);
        assert_eq!(b.customer_name, "Ravi");
    }
}
