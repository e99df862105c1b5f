//! Shop storage over the local store

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::sync::Mutex;

use shared::models::{
    Customer, CustomerBalance, NewOrder, NewPayment, Order, OrderStatus, OrderUpdate, Patch,
    Payment,
};
use shared::store::{Collection, LocalStore, keys};
use shared::util::{now, prefixed_id};

use super::{ShopError, ShopResult};
use crate::analytics::{self, OrderStats, OrdersByAge, Timeframe};
use crate::core::config::DEFAULT_RATE_PER_ITEM;
use crate::ledger::{self, Balance};
use crate::money::{MAX_QUANTITY, line_total, round_money};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, char_len};

/// Status filter for order listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Pending => order.status == OrderStatus::Pending,
            Self::Completed => order.status == OrderStatus::Completed,
        }
    }
}

/// Orders, customers and payments of the shop
#[derive(Clone)]
pub struct ShopStorage {
    orders: Collection<Order>,
    customers: Collection<Customer>,
    payments: Collection<Payment>,
    write_lock: Arc<Mutex<()>>,
    default_rate: Decimal,
}

impl ShopStorage {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            orders: Collection::new(store.clone(), keys::ORDERS),
            customers: Collection::new(store.clone(), keys::CUSTOMERS),
            payments: Collection::new(store, keys::PAYMENTS),
            write_lock: Arc::new(Mutex::new(())),
            default_rate: DEFAULT_RATE_PER_ITEM,
        }
    }

    /// Rate used when an order does not carry one
    pub fn with_default_rate(mut self, rate: Decimal) -> Self {
        self.default_rate = rate;
        self
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    // ========== Orders ==========

    pub fn orders(&self, filter: OrderFilter) -> ShopResult<Vec<Order>> {
        let mut orders = self.orders.get_all()?;
        orders.retain(|o| filter.matches(o));
        Ok(orders)
    }

    pub fn order(&self, id: &str) -> ShopResult<Order> {
        self.orders
            .find(id)?
            .ok_or_else(|| ShopError::OrderNotFound(id.to_string()))
    }

    /// Validate, save and attach a new order to its customer
    pub async fn record_order(&self, new: NewOrder) -> ShopResult<Order> {
        let name = new.customer_name.trim();
        if name.is_empty() {
            return Err(ShopError::Validation("customer name must not be empty".into()));
        }
        if char_len(name) > MAX_NAME_LEN {
            return Err(ShopError::Validation(format!(
                "customer name is too long ({} chars, max {MAX_NAME_LEN})",
                char_len(name)
            )));
        }
        if new.quantity == 0 || new.quantity > MAX_QUANTITY {
            return Err(ShopError::InvalidQuantity(new.quantity));
        }
        let rate = new.rate_per_item.unwrap_or(self.default_rate);
        if rate.is_sign_negative() {
            return Err(ShopError::InvalidRate(format!(
                "rate must be non-negative, got {rate}"
            )));
        }
        let phone = new.customer_phone.trim();

        let _guard = self.write_lock.lock().await;
        let mut customer = self.find_or_create_customer(name, phone)?;

        let order = Order {
            id: prefixed_id("order"),
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            quantity: new.quantity,
            rate_per_item: round_money(rate),
            total_amount: line_total(new.quantity, rate),
            photo_url: new.photo_url.filter(|u| !u.is_empty()),
            created_at: now(),
            completed_at: None,
            status: OrderStatus::Pending,
        };
        self.orders.save(order.clone())?;

        ledger::attach_order(&mut customer, &order);
        let customer_id = customer.id.clone();
        self.customers.modify(&customer_id, move |c| *c = customer)?;

        tracing::info!(
            order_id = %order.id,
            customer_id = %customer_id,
            quantity = order.quantity,
            total = %order.total_amount,
            "Order recorded"
        );
        Ok(order)
    }

    /// Mark an order completed now
    pub async fn complete_order(&self, id: &str) -> ShopResult<Order> {
        let _guard = self.write_lock.lock().await;
        let order = self.order(id)?;
        if order.status == OrderStatus::Completed {
            return Err(ShopError::OrderAlreadyCompleted(id.to_string()));
        }
        let updated = self
            .orders
            .modify(id, |o| OrderUpdate::completed(now()).apply_to(o))?
            .ok_or_else(|| ShopError::OrderNotFound(id.to_string()))?;
        tracing::info!(order_id = %id, "Order completed");
        Ok(updated)
    }

    /// Remove an order record and void it on its customer
    ///
    /// The customer's balances are left as they are; the order's total
    /// stays on record so replay still agrees with them.
    pub async fn delete_order(&self, id: &str) -> ShopResult<bool> {
        let _guard = self.write_lock.lock().await;
        let Some(order) = self.orders.find(id)? else {
            return Ok(false);
        };

        let owner = self
            .customers
            .get_all()?
            .into_iter()
            .find(|c| c.orders.iter().any(|o| o == id));
        if let Some(mut customer) = owner {
            ledger::void_order(&mut customer, &order);
            let customer_id = customer.id.clone();
            self.customers.modify(&customer_id, move |c| *c = customer)?;
        }

        self.orders.delete(id)?;
        tracing::info!(order_id = %id, total = %order.total_amount, "Order deleted");
        Ok(true)
    }

    // ========== Customers ==========

    pub fn customers(&self) -> ShopResult<Vec<Customer>> {
        Ok(self.customers.get_all()?)
    }

    pub fn customer(&self, id: &str) -> ShopResult<Customer> {
        self.customers
            .find(id)?
            .ok_or_else(|| ShopError::CustomerNotFound(id.to_string()))
    }

    /// Look the customer up by phone, creating one with zero balances if absent
    ///
    /// Customers without a phone are told apart by name.
    pub async fn get_or_create_customer(&self, name: &str, phone: &str) -> ShopResult<Customer> {
        let _guard = self.write_lock.lock().await;
        self.find_or_create_customer(name.trim(), phone.trim())
    }

    fn find_or_create_customer(&self, name: &str, phone: &str) -> ShopResult<Customer> {
        let customers = self.customers.get_all()?;
        let existing = customers.into_iter().find(|c| {
            if phone.is_empty() {
                c.phone.is_empty() && c.name == name
            } else {
                c.phone == phone
            }
        });
        if let Some(customer) = existing {
            return Ok(customer);
        }

        let customer = Customer::new(prefixed_id("cust"), name, phone);
        self.customers.save(customer.clone())?;
        tracing::info!(customer_id = %customer.id, name = %name, "Customer created");
        Ok(customer)
    }

    /// Orders belonging to a customer: matched by phone, or by the
    /// customer's own order ids when no phone is on file
    pub fn customer_orders(&self, customer: &Customer) -> ShopResult<Vec<Order>> {
        let mut orders = self.orders.get_all()?;
        if customer.phone.is_empty() {
            orders.retain(|o| customer.orders.contains(&o.id));
        } else {
            orders.retain(|o| o.customer_phone == customer.phone);
        }
        Ok(orders)
    }

    pub fn customer_balance(&self, id: &str) -> ShopResult<CustomerBalance> {
        Ok(CustomerBalance::from(&self.customer(id)?))
    }

    /// Balance recomputed from the customer's stored order and payment history
    pub fn replay_balance(&self, id: &str) -> ShopResult<Balance> {
        let customer = self.customer(id)?;
        let orders: Vec<Order> = self
            .orders
            .get_all()?
            .into_iter()
            .filter(|o| customer.orders.contains(&o.id))
            .collect();
        let payments = self.payments_by_customer(id)?;
        Ok(ledger::replay_with_voided(
            &orders,
            &customer.voided_orders,
            &payments,
        ))
    }

    // ========== Payments ==========

    /// Record a payment and apply its ledger effect exactly once
    ///
    /// Nothing is written when validation fails or the customer is unknown.
    #[tracing::instrument(skip(self, new), fields(kind = new.kind.as_str(), amount = %new.amount))]
    pub async fn record_payment(&self, customer_id: &str, new: NewPayment) -> ShopResult<Payment> {
        let amount = round_money(new.amount);
        ledger::validate_amount(amount)?;
        if let Some(notes) = &new.notes
            && char_len(notes) > MAX_NOTE_LEN
        {
            return Err(ShopError::Validation(format!(
                "notes is too long ({} chars, max {MAX_NOTE_LEN})",
                char_len(notes)
            )));
        }

        let _guard = self.write_lock.lock().await;
        let mut customer = self.customer(customer_id)?;

        let payment = Payment {
            id: prefixed_id("pay"),
            customer_id: customer_id.to_string(),
            amount,
            kind: new.kind,
            date: now(),
            notes: new.notes.filter(|n| !n.trim().is_empty()),
        };

        ledger::apply_payment(&mut customer, amount, new.kind)?;
        customer.payments.push(payment.id.clone());

        self.payments.save(payment.clone())?;
        self.customers.modify(customer_id, move |c| *c = customer)?;

        tracing::info!(payment_id = %payment.id, "Payment recorded");
        Ok(payment)
    }

    pub fn payments_by_customer(&self, customer_id: &str) -> ShopResult<Vec<Payment>> {
        let mut payments = self.payments.get_all()?;
        payments.retain(|p| p.customer_id == customer_id);
        Ok(payments)
    }

    // ========== Analytics ==========

    pub fn analytics(&self, timeframe: Timeframe) -> ShopResult<OrderStats> {
        let orders = self.orders.get_all()?;
        Ok(analytics::order_stats(&orders, timeframe, chrono::Local::now()))
    }

    pub fn orders_by_age(&self) -> ShopResult<OrdersByAge> {
        let orders = self.orders.get_all()?;
        Ok(analytics::orders_by_age(&orders, chrono::Local::now()))
    }

    // ========== Maintenance ==========

    /// Drop orders, customers and payments
    pub async fn clear_all_data(&self) -> ShopResult<()> {
        let _guard = self.write_lock.lock().await;
        self.orders.clear()?;
        self.customers.clear()?;
        self.payments.clear()?;
        tracing::warn!("All shop data cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::models::PaymentType;
    use shared::store::MemoryStore;

    fn shop() -> ShopStorage {
        ShopStorage::new(Arc::new(MemoryStore::new()))
    }

    fn new_order(name: &str, phone: &str, quantity: u32) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            quantity,
            rate_per_item: None,
            photo_url: None,
        }
    }

    fn pay(amount: Decimal, kind: PaymentType) -> NewPayment {
        NewPayment {
            amount,
            kind,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_get_or_create_is_keyed_by_phone() {
        let shop = shop();
        let a = shop.get_or_create_customer("Anita", "98765").await.unwrap();
        let b = shop.get_or_create_customer("Anita S", "98765").await.unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(b.name, "Anita");
        assert_eq!(shop.customers().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_customers_without_phone_split_by_name() {
        let shop = shop();
        let a = shop.get_or_create_customer("Anita", "").await.unwrap();
        let b = shop.get_or_create_customer("Ravi", "").await.unwrap();
        let a2 = shop.get_or_create_customer("Anita", "").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id, a2.id);
    }

    #[tokio::test]
    async fn test_record_order_uses_default_rate() {
        let shop = shop().with_default_rate(dec!(10));
        let order = shop.record_order(new_order("Ravi", "1", 3)).await.unwrap();
        assert_eq!(order.rate_per_item, dec!(10));
        assert_eq!(order.total_amount, dec!(30));
        assert!(order.id.starts_with("order_"));

        let customer = shop.get_or_create_customer("Ravi", "1").await.unwrap();
        assert_eq!(customer.total_due, dec!(30));
        assert_eq!(customer.orders, vec![order.id.clone()]);
        assert_eq!(customer.last_order_at, Some(order.created_at));
    }

    #[tokio::test]
    async fn test_record_order_rejects_bad_input_without_writing() {
        let shop = shop();
        assert!(matches!(
            shop.record_order(new_order("Ravi", "1", 0)).await,
            Err(ShopError::InvalidQuantity(0))
        ));
        assert!(matches!(
            shop.record_order(new_order("Ravi", "1", 10_000)).await,
            Err(ShopError::InvalidQuantity(10_000))
        ));
        let mut negative = new_order("Ravi", "1", 2);
        negative.rate_per_item = Some(dec!(-1));
        assert!(matches!(
            shop.record_order(negative).await,
            Err(ShopError::InvalidRate(_))
        ));
        assert!(matches!(
            shop.record_order(new_order("  ", "1", 2)).await,
            Err(ShopError::Validation(_))
        ));
        assert!(matches!(
            shop.record_order(new_order(&"a".repeat(MAX_NAME_LEN + 1), "1", 2)).await,
            Err(ShopError::Validation(_))
        ));

        assert!(shop.orders(OrderFilter::All).unwrap().is_empty());
        assert!(shop.customers().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_long_devanagari_name_within_char_limit() {
        let shop = shop();
        let name = "राजेश कुमार ".repeat(16);
        let name = name.trim();
        assert!(name.len() > MAX_NAME_LEN);
        assert!(char_len(name) <= MAX_NAME_LEN);

        let order = shop.record_order(new_order(name, "3", 1)).await.unwrap();
        assert_eq!(order.customer_name, name);
    }

    #[tokio::test]
    async fn test_complete_order() {
        let shop = shop();
        let order = shop.record_order(new_order("Ravi", "1", 2)).await.unwrap();
        let done = shop.complete_order(&order.id).await.unwrap();
        assert_eq!(done.status, OrderStatus::Completed);
        assert!(done.completed_at.is_some());

        assert!(matches!(
            shop.complete_order(&order.id).await,
            Err(ShopError::OrderAlreadyCompleted(_))
        ));
        assert!(matches!(
            shop.complete_order("order_missing").await,
            Err(ShopError::OrderNotFound(_))
        ));

        assert_eq!(shop.orders(OrderFilter::Pending).unwrap().len(), 0);
        assert_eq!(shop.orders(OrderFilter::Completed).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_order_keeps_balance() {
        let shop = shop();
        let order = shop.record_order(new_order("Ravi", "1", 2)).await.unwrap();
        assert!(shop.delete_order(&order.id).await.unwrap());
        assert!(!shop.delete_order(&order.id).await.unwrap());

        let customer = shop.get_or_create_customer("Ravi", "1").await.unwrap();
        assert_eq!(customer.total_due, dec!(16));
        assert!(customer.orders.is_empty());
        assert_eq!(customer.voided_orders[0].id, order.id);
    }

    #[tokio::test]
    async fn test_replay_agrees_after_delete() {
        let shop = shop();
        let kept = shop.record_order(new_order("Anita", "222", 2)).await.unwrap();
        let deleted = shop.record_order(new_order("Anita", "222", 5)).await.unwrap();
        let id = shop.get_or_create_customer("Anita", "222").await.unwrap().id;
        shop.record_payment(&id, pay(dec!(20), PaymentType::Payment)).await.unwrap();

        shop.delete_order(&deleted.id).await.unwrap();

        let customer = shop.customer(&id).unwrap();
        assert_eq!(customer.total_due, dec!(36));
        assert_eq!(shop.replay_balance(&id).unwrap(), Balance::of(&customer));

        let balance = shop.customer_balance(&id).unwrap();
        assert_eq!(balance.order_count, 1);
        assert_eq!(customer.orders, vec![kept.id]);
    }

    #[tokio::test]
    async fn test_payment_for_unknown_customer_writes_nothing() {
        let shop = shop();
        let err = shop
            .record_payment("cust_nope", pay(dec!(10), PaymentType::Payment))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::CustomerNotFound(_)));
        assert!(shop.payments_by_customer("cust_nope").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_payment_amount_writes_nothing() {
        let shop = shop();
        let order = shop.record_order(new_order("Ravi", "1", 2)).await.unwrap();
        let customer = shop.get_or_create_customer("Ravi", "1").await.unwrap();

        for amount in [Decimal::ZERO, dec!(-4), dec!(1000001)] {
            let err = shop
                .record_payment(&customer.id, pay(amount, PaymentType::Payment))
                .await
                .unwrap_err();
            assert!(matches!(err, ShopError::Ledger(_)));
        }

        let after = shop.customer(&customer.id).unwrap();
        assert_eq!(after.total_due, order.total_amount);
        assert!(after.payments.is_empty());
        assert!(shop.payments_by_customer(&customer.id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_payment_types_and_replay_agree() {
        let shop = shop();
        shop.record_order(new_order("Meena", "555", 10)).await.unwrap();
        let id = shop.get_or_create_customer("Meena", "555").await.unwrap().id;

        shop.record_payment(&id, pay(dec!(30), PaymentType::Payment)).await.unwrap();
        shop.record_payment(&id, pay(dec!(20), PaymentType::Credit)).await.unwrap();
        shop.record_payment(&id, pay(dec!(100), PaymentType::Refund)).await.unwrap();

        let c = shop.customer(&id).unwrap();
        assert_eq!(c.total_due, Decimal::ZERO);
        assert_eq!(c.total_paid, dec!(30));
        assert_eq!(c.advance_credit, dec!(20));
        assert_eq!(c.payments.len(), 3);

        let balance = shop.customer_balance(&id).unwrap();
        assert_eq!(balance.net_balance, dec!(-20));
        assert_eq!(balance.order_count, 1);

        let replayed = shop.replay_balance(&id).unwrap();
        assert_eq!(replayed, Balance::of(&c));
    }

    #[tokio::test]
    async fn test_customer_orders_by_phone_or_ids() {
        let shop = shop();
        shop.record_order(new_order("Anita", "111", 1)).await.unwrap();
        shop.record_order(new_order("Anita", "111", 2)).await.unwrap();
        shop.record_order(new_order("Ravi", "", 3)).await.unwrap();
        shop.record_order(new_order("Mohan", "", 4)).await.unwrap();

        let anita = shop.get_or_create_customer("Anita", "111").await.unwrap();
        assert_eq!(shop.customer_orders(&anita).unwrap().len(), 2);

        let ravi = shop.get_or_create_customer("Ravi", "").await.unwrap();
        let orders = shop.customer_orders(&ravi).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_clear_all_data() {
        let shop = shop();
        shop.record_order(new_order("Ravi", "1", 2)).await.unwrap();
        shop.clear_all_data().await.unwrap();
        assert!(shop.orders(OrderFilter::All).unwrap().is_empty());
        assert!(shop.customers().unwrap().is_empty());
    }
}
