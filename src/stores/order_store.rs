use crate::models::order::{Order, OrderLine, OrderStatus};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

const ESTIMATED_TIME: &str = "30 mins";

/// Why a cancellation was refused
#[derive(Debug, PartialEq, Eq)]
pub enum CancelError {
    NotFound,
    /// The caller does not own the order
    NotOwner,
    /// Only Pending orders can be cancelled
    NotPending,
}

/// The authoritative in-memory ledger of orders
pub struct OrderStore {
    orders: DashMap<u64, Order>,
    next_id: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Record a new order: stamps the owner, Pending status, creation time
    /// and the next sequential id. The total is stored as submitted.
    pub fn create(&self, user_id: u64, items: Vec<OrderLine>, total_price: f64) -> Order {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = Order {
            id,
            user_id,
            items,
            total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            estimated_time: ESTIMATED_TIME.to_string(),
        };
        self.orders.insert(id, order.clone());
        order
    }

    /// Orders owned by the given user, in insertion (id) order
    pub fn list_for_user(&self, user_id: u64) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by_key(|order| order.id);
        orders
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        self.orders.get(&id).map(|entry| entry.value().clone())
    }

    /// Overwrite an order's status, returning the updated record.
    /// Any status can replace any other; there is no transition table.
    pub fn set_status(&self, id: u64, status: OrderStatus) -> Option<Order> {
        let mut entry = self.orders.get_mut(&id)?;
        entry.value_mut().status = status;
        Some(entry.value().clone())
    }

    /// Cancel (hard-delete) an order. The ownership and status checks run
    /// under the map entry, so the check and the removal are atomic.
    pub fn cancel(&self, id: u64, user_id: u64) -> Result<Order, CancelError> {
        match self.orders.entry(id) {
            Entry::Vacant(_) => Err(CancelError::NotFound),
            Entry::Occupied(entry) => {
                if entry.get().user_id != user_id {
                    return Err(CancelError::NotOwner);
                }
                if entry.get().status != OrderStatus::Pending {
                    return Err(CancelError::NotPending);
                }
                Ok(entry.remove())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
