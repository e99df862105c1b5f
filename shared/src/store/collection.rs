//! Typed JSON collection over a [`LocalStore`] key
//!
//! Every operation reads the whole array, mutates it in memory and writes
//! the whole array back. Callers that need several operations to appear
//! atomic must serialise them themselves.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CORRUPT_MARKER, LocalStore, StoreError, StoreResult};
use crate::models::{Patch, Record};
use crate::util::now_millis;

pub struct Collection<T> {
    store: Arc<dyn LocalStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn LocalStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// All records, surfacing a corrupt blob as [`StoreError::Corrupted`]
    pub fn try_get_all(&self) -> StoreResult<Vec<T>> {
        match self.store.get_item(self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupted {
                key: self.key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// All records
    ///
    /// A blob that fails to parse is moved to `<key>.corrupt.<millis>` and
    /// the collection reads as empty.
    pub fn get_all(&self) -> StoreResult<Vec<T>> {
        match self.try_get_all() {
            Err(StoreError::Corrupted { reason, .. }) => {
                let target = self.quarantine()?;
                tracing::warn!(
                    key = self.key,
                    quarantined_as = %target,
                    reason = %reason,
                    "Corrupt collection moved aside, reading as empty"
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Overwrite the collection
    pub fn replace_all(&self, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.store.set_item(self.key, &json)
    }

    /// Append a record
    pub fn save(&self, item: T) -> StoreResult<()> {
        let mut items = self.get_all()?;
        items.push(item);
        self.replace_all(&items)
    }

    /// Insert a record at the front (newest first collections)
    pub fn prepend(&self, item: T) -> StoreResult<()> {
        let mut items = self.get_all()?;
        items.insert(0, item);
        self.replace_all(&items)
    }

    pub fn find(&self, id: &T::Id) -> StoreResult<Option<T>> {
        Ok(self.get_all()?.into_iter().find(|item| item.id() == id))
    }

    /// Merge `patch` into the record with `id`
    ///
    /// Returns `false` without writing when no such record exists.
    pub fn update(&self, id: &T::Id, patch: impl Patch<T>) -> StoreResult<bool> {
        let mut items = self.get_all()?;
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch.apply_to(item);
                self.replace_all(&items)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Mutate the record with `id` in place and return its new value
    pub fn modify<F>(&self, id: &T::Id, f: F) -> StoreResult<Option<T>>
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let mut items = self.get_all()?;
        let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
            return Ok(None);
        };
        f(item);
        let updated = item.clone();
        self.replace_all(&items)?;
        Ok(Some(updated))
    }

    /// Remove the record with `id`; returns whether anything was removed
    pub fn delete(&self, id: &T::Id) -> StoreResult<bool> {
        let mut items = self.get_all()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.replace_all(&items)?;
        Ok(true)
    }

    /// Drop the whole collection
    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove_item(self.key)
    }

    fn quarantine(&self) -> StoreResult<String> {
        let target = format!("{}{}{}", self.key, CORRUPT_MARKER, now_millis());
        if let Some(raw) = self.store.get_item(self.key)? {
            self.store.set_item(&target, &raw)?;
        }
        self.store.remove_item(self.key)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Complaint, ComplaintStatus, ComplaintUpdate, Order, OrderStatus, OrderUpdate,
    };
    use crate::store::{MemoryStore, RedbStore, keys};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn order(id: &str, qty: u32) -> Order {
        Order {
            id: id.to_string(),
            customer_name: "Anita".to_string(),
            customer_phone: "9876543210".to_string(),
            quantity: qty,
            rate_per_item: dec!(8),
            total_amount: dec!(8) * rust_decimal::Decimal::from(qty),
            photo_url: None,
            created_at: Utc::now(),
            completed_at: None,
            status: OrderStatus::Pending,
        }
    }

    fn complaint(id: i64) -> Complaint {
        Complaint {
            id,
            tracking_id: format!("CMP-{:09}", id),
            title: "Hand pump broken".to_string(),
            description: "No water since Monday".to_string(),
            date: "01/01/2025".to_string(),
            time: "10:00".to_string(),
            user_name: "Anonymous".to_string(),
            village: "Pindra".to_string(),
            village_id: Some(1),
            status: ComplaintStatus::Pending,
            category: "पानी".to_string(),
            votes: 0,
            image: None,
        }
    }

    fn orders() -> Collection<Order> {
        Collection::new(Arc::new(MemoryStore::new()), keys::ORDERS)
    }

    #[test]
    fn test_empty_when_absent() {
        assert!(orders().get_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_get_all_returns_record_unchanged() {
        let col = orders();
        let o = order("order_1", 5);
        col.save(o.clone()).unwrap();
        assert_eq!(col.get_all().unwrap(), vec![o]);
    }

    #[test]
    fn test_save_appends_and_prepend_inserts_first() {
        let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        let col: Collection<Complaint> = Collection::new(store, keys::COMPLAINTS);
        col.save(complaint(1)).unwrap();
        col.save(complaint(2)).unwrap();
        col.prepend(complaint(3)).unwrap();
        let ids: Vec<i64> = col.get_all().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_merges_fields() {
        let col = orders();
        col.save(order("order_1", 5)).unwrap();
        let at = Utc::now();
        assert!(col.update("order_1", OrderUpdate::completed(at)).unwrap());

        let o = col.find("order_1").unwrap().unwrap();
        assert_eq!(o.status, OrderStatus::Completed);
        assert_eq!(o.completed_at, Some(at));
        assert_eq!(o.quantity, 5);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let col = orders();
        col.save(order("order_1", 5)).unwrap();
        assert!(!col.update("order_x", OrderUpdate::completed(Utc::now())).unwrap());
        assert_eq!(col.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_by_numeric_id() {
        let col: Collection<Complaint> =
            Collection::new(Arc::new(MemoryStore::new()), keys::COMPLAINTS);
        col.save(complaint(7)).unwrap();
        let patch = ComplaintUpdate {
            status: Some(ComplaintStatus::InProgress),
            votes: None,
        };
        assert!(col.update(&7, patch).unwrap());
        assert_eq!(
            col.find(&7).unwrap().unwrap().status,
            ComplaintStatus::InProgress
        );
    }

    #[test]
    fn test_modify_returns_new_value() {
        let col = orders();
        col.save(order("order_1", 5)).unwrap();
        let updated = col.modify("order_1", |o| o.quantity = 6).unwrap().unwrap();
        assert_eq!(updated.quantity, 6);
        assert!(col.modify("nope", |o| o.quantity = 1).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let col = orders();
        col.save(order("order_1", 1)).unwrap();
        col.save(order("order_2", 2)).unwrap();
        assert!(col.delete("order_1").unwrap());
        assert!(!col.delete("order_1").unwrap());
        let ids: Vec<String> = col.get_all().unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["order_2".to_string()]);
    }

    #[test]
    fn test_clear() {
        let col = orders();
        col.save(order("order_1", 1)).unwrap();
        col.clear().unwrap();
        assert!(col.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_quarantined() {
        let store = Arc::new(MemoryStore::new());
        store.set_item(keys::ORDERS, "{not json").unwrap();
        let col: Collection<Order> = Collection::new(store.clone(), keys::ORDERS);

        assert!(matches!(
            col.try_get_all(),
            Err(StoreError::Corrupted { .. })
        ));
        assert!(col.get_all().unwrap().is_empty());

        let keys = store.keys().unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].starts_with("rahul_dry_orders.corrupt."));
        assert_eq!(
            store.get_item(&keys[0]).unwrap().as_deref(),
            Some("{not json")
        );

        // The collection is usable again
        col.save(order("order_1", 2)).unwrap();
        assert_eq!(col.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_redb_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.redb");
        let o = order("order_9", 3);
        {
            let store: Arc<dyn LocalStore> = Arc::new(RedbStore::open(&path).unwrap());
            Collection::<Order>::new(store, keys::ORDERS)
                .save(o.clone())
                .unwrap();
        }
        let store: Arc<dyn LocalStore> = Arc::new(RedbStore::open(&path).unwrap());
        let col = Collection::<Order>::new(store, keys::ORDERS);
        assert_eq!(col.get_all().unwrap(), vec![o]);
    }
}
