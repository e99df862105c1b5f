//! Balance ledger
//!
//! The only place customer balances change. Rule table per payment type:
//!
//! | type | totalPaid | totalDue | advanceCredit |
//! |------|-----------|----------|---------------|
//! | payment | += amount | max(0, due - amount) | - |
//! | credit | - | - | += amount |
//! | refund | - | max(0, due - amount) | - |
//!
//! Orders raise `totalDue` by their total. Deleting an order voids it:
//! the id leaves the order list but its total keeps standing in
//! `totalDue`, and replay still counts it. Net balance is derived as
//! `totalDue - advanceCredit` and never stored.


use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use shared::models::{Customer, Order, Payment, PaymentType, VoidedOrder};

use crate::money::{MAX_PAYMENT_AMOUNT, round_money};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("amount exceeds maximum allowed ({max}), got {amount}")]
    AmountTooLarge { amount: Decimal, max: Decimal },
}

/// Reject amounts that are not in `(0, 1_000_000]`
pub fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    if amount > MAX_PAYMENT_AMOUNT {
        return Err(LedgerError::AmountTooLarge {
            amount,
            max: MAX_PAYMENT_AMOUNT,
        });
    }
    Ok(())
}

/// The three balance fields a customer carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub total_due: Decimal,
    pub total_paid: Decimal,
    pub advance_credit: Decimal,
}

impl Balance {
    pub fn of(customer: &Customer) -> Self {
        Self {
            total_due: customer.total_due,
            total_paid: customer.total_paid,
            advance_credit: customer.advance_credit,
        }
    }

    pub fn net(&self) -> Decimal {
        self.total_due - self.advance_credit
    }

    fn apply_payment(&mut self, amount: Decimal, kind: PaymentType) {
        match kind {
            PaymentType::Payment => {
                self.total_paid = round_money(self.total_paid + amount);
                self.total_due = round_money((self.total_due - amount).max(Decimal::ZERO));
            }
            PaymentType::Credit => {
                self.advance_credit = round_money(self.advance_credit + amount);
            }
            PaymentType::Refund => {
                self.total_due = round_money((self.total_due - amount).max(Decimal::ZERO));
            }
        }
    }

    fn apply_order(&mut self, total: Decimal) {
        self.total_due = round_money(self.total_due + total);
    }

    fn write_to(self, customer: &mut Customer) {
        customer.total_due = self.total_due;
        customer.total_paid = self.total_paid;
        customer.advance_credit = self.advance_credit;
    }
}

/// Apply one payment event to a customer's balance fields
///
/// Invalid amounts leave the customer untouched.
pub fn apply_payment(
    customer: &mut Customer,
    amount: Decimal,
    kind: PaymentType,
) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    let mut balance = Balance::of(customer);
    balance.apply_payment(amount, kind);
    balance.write_to(customer);
    Ok(())
}

/// Attach a freshly created order: raise the due, record the id, stamp time
pub fn attach_order(customer: &mut Customer, order: &Order) {
    let mut balance = Balance::of(customer);
    balance.apply_order(order.total_amount);
    balance.write_to(customer);
    customer.orders.push(order.id.clone());
    customer.last_order_at = Some(order.created_at);
}

/// Move a deleted order from the order list to the voided list
///
/// Balances are untouched. Returns false when the order is not the
/// customer's.
pub fn void_order(customer: &mut Customer, order: &Order) -> bool {
    let Some(pos) = customer.orders.iter().position(|id| *id == order.id) else {
        return false;
    };
    customer.orders.remove(pos);
    customer.voided_orders.push(VoidedOrder {
        id: order.id.clone(),
        total_amount: order.total_amount,
        created_at: order.created_at,
    });
    true
}

/// `totalDue - advanceCredit`, negative when the shop owes the customer
pub fn net_balance(customer: &Customer) -> Decimal {
    customer.net_balance()
}

enum Event<'a> {
    Order { total: Decimal, at: DateTime<Utc> },
    Payment(&'a Payment),
}

impl Event<'_> {
    fn at(&self) -> DateTime<Utc> {
        match self {
            Event::Order { at, .. } => *at,
            Event::Payment(p) => p.date,
        }
    }

    /// Orders sort before payments stamped at the same instant
    fn rank(&self) -> u8 {
        match self {
            Event::Order { .. } => 0,
            Event::Payment(_) => 1,
        }
    }
}

/// Recompute a balance from history with the same rule table
///
/// Events are applied in time order. Payments with invalid amounts are
/// skipped, as they could never have been stored.
pub fn replay(orders: &[Order], payments: &[Payment]) -> Balance {
    replay_with_voided(orders, &[], payments)
}

/// [`replay`] that also counts the totals of deleted orders
pub fn replay_with_voided(
    orders: &[Order],
    voided: &[VoidedOrder],
    payments: &[Payment],
) -> Balance {
    let mut events: Vec<Event<'_>> = orders
        .iter()
        .map(|o| Event::Order {
            total: o.total_amount,
            at: o.created_at,
        })
        .chain(voided.iter().map(|v| Event::Order {
            total: v.total_amount,
            at: v.created_at,
        }))
        .chain(payments.iter().map(Event::Payment))
        .collect();
    events.sort_by(|a, b| a.at().cmp(&b.at()).then(a.rank().cmp(&b.rank())));

    let mut balance = Balance::default();
    for event in events {
        match event {
            Event::Order { total, .. } => balance.apply_order(total),
            Event::Payment(p) => {
                if validate_amount(p.amount).is_ok() {
                    balance.apply_payment(p.amount, p.kind);
                }
            }
        }
    }
    balance
}
