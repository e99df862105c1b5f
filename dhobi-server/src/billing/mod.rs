//! Customer bills
//!
//! - [`html`] - printable HTML bill
//! - [`whatsapp`] - Hindi summary message and `wa.me` share link

pub mod html;
pub mod whatsapp;

pub use html::render_html;
pub use whatsapp::{whatsapp_message, whatsapp_url};

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{Customer, Order};

use crate::shop::{ShopResult, ShopStorage};

/// Everything a bill shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillData {
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub total_due: Decimal,
    pub advance_credit: Decimal,
    pub net_balance: Decimal,
    pub generated_at: DateTime<Utc>,
}

impl BillData {
    pub fn new(customer: Customer, orders: Vec<Order>, generated_at: DateTime<Utc>) -> Self {
        Self {
            total_due: customer.total_due,
            advance_credit: customer.advance_credit,
            net_balance: customer.net_balance(),
            customer,
            orders,
            generated_at,
        }
    }

    pub fn total_items(&self) -> u64 {
        self.orders.iter().map(|o| u64::from(o.quantity)).sum()
    }

    pub fn total_amount(&self) -> Decimal {
        self.orders.iter().map(|o| o.total_amount).sum()
    }

    /// `Bill_<name>_<millis>.html`
    pub fn file_name(&self) -> String {
        let name: String = self
            .customer
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | '"') { '_' } else { c })
            .collect();
        format!("Bill_{}_{}.html", name, self.generated_at.timestamp_millis())
    }
}

/// Collect a customer's bill from the shop records
pub fn bill_for(shop: &ShopStorage, customer_id: &str) -> ShopResult<BillData> {
    let customer = shop.customer(customer_id)?;
    let orders = shop.customer_orders(&customer)?;
    Ok(BillData::new(customer, orders, Utc::now()))
}

/// `dd/mm/yyyy` in the shop's local time
pub(crate) fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::models::OrderStatus;

    pub(crate) fn sample_bill(total_due: Decimal, advance: Decimal) -> BillData {
        let mut customer = Customer::new("cust_1", "Anita", "+91 98765-43210");
        customer.total_due = total_due;
        customer.advance_credit = advance;
        let order = |id: &str, qty: u32, status| Order {
            id: id.to_string(),
            customer_name: "Anita".into(),
            customer_phone: "+91 98765-43210".into(),
            quantity: qty,
            rate_per_item: dec!(8),
            total_amount: dec!(8) * Decimal::from(qty),
            photo_url: None,
            created_at: Utc::now(),
            completed_at: None,
            status,
        };
        BillData::new(
            customer,
            vec![
                order("order_1", 5, OrderStatus::Completed),
                order("order_2", 3, OrderStatus::Pending),
            ],
            Utc::now(),
        )
    }

    #[test]
    fn test_totals() {
        let bill = sample_bill(dec!(64), dec!(4));
        assert_eq!(bill.total_items(), 8);
        assert_eq!(bill.total_amount(), dec!(64));
        assert_eq!(bill.net_balance, dec!(60));
    }

    #[test]
    fn test_file_name() {
        let mut bill = sample_bill(dec!(0), dec!(0));
        bill.customer.name = "A/B".into();
        let name = bill.file_name();
        assert!(name.starts_with("Bill_A_B_"));
        assert!(name.ends_with(".html"));
    }
}
