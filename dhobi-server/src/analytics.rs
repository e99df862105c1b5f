//! Order statistics and ageing
//!
//! Day boundaries follow the server's local time zone.

use chrono::{DateTime, Duration, Local, Months, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{Order, OrderStatus};

use crate::money::round_money;

/// Reporting window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Since local midnight
    #[default]
    Today,
    /// Last 7 days
    Week,
    /// Last calendar month
    Month,
}

impl Timeframe {
    /// First instant counted in the window ending at `now`
    pub fn start(&self, now: DateTime<Local>) -> DateTime<Local> {
        match self {
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
                .unwrap_or(now),
            Self::Week => now - Duration::days(7),
            Self::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub total_items: u64,
    /// Items per order, 0 when there are no orders
    pub average_per_order: Decimal,
}

pub fn order_stats(orders: &[Order], timeframe: Timeframe, now: DateTime<Local>) -> OrderStats {
    let start = timeframe.start(now);
    let window: Vec<&Order> = orders.iter().filter(|o| o.created_at >= start).collect();

    let total_orders = window.len();
    let total_items: u64 = window.iter().map(|o| u64::from(o.quantity)).sum();
    let average_per_order = if total_orders > 0 {
        round_money(Decimal::from(total_items) / Decimal::from(total_orders))
    } else {
        Decimal::ZERO
    };

    OrderStats {
        total_orders,
        total_revenue: window.iter().map(|o| o.total_amount).sum(),
        pending_orders: window
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        completed_orders: window
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count(),
        total_items,
        average_per_order,
    }
}

/// Pending orders grouped by how long they have been waiting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersByAge {
    /// Created on the current calendar day
    pub today: Vec<Order>,
    /// 2 to 3 whole days old
    #[serde(rename = "2-3days")]
    pub two_to_three_days: Vec<Order>,
    /// 4 to 7 whole days old
    pub week: Vec<Order>,
    /// Older than 7 days
    pub overdue: Vec<Order>,
}

pub fn orders_by_age(orders: &[Order], now: DateTime<Local>) -> OrdersByAge {
    let today = now.date_naive();
    let mut buckets = OrdersByAge::default();

    for order in orders.iter().filter(|o| o.status == OrderStatus::Pending) {
        if order.created_at.with_timezone(&Local).date_naive() == today {
            buckets.today.push(order.clone());
        }
        let days = (now.with_timezone(&Utc) - order.created_at).num_days();
        match days {
            2..=3 => buckets.two_to_three_days.push(order.clone()),
            4..=7 => buckets.week.push(order.clone()),
            d if d > 7 => buckets.overdue.push(order.clone()),
            _ => {}
        }
    }
    buckets
}
