use crate::models::menu::{MenuItem, UpdateMenuItemRequest};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory catalog of menu items
///
/// Item names carry no uniqueness constraint; two items with the same name
/// and different ids are both retained.
pub struct MenuStore {
    items: DashMap<u64, MenuItem>,
    next_id: AtomicU64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Add an item, assigning the next sequential id
    pub fn insert(
        &self,
        name: String,
        description: String,
        price: f64,
        category: String,
    ) -> MenuItem {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = MenuItem {
            id,
            name,
            description,
            price,
            category,
        };
        self.items.insert(id, item.clone());
        item
    }

    /// All items in insertion (id) order
    pub fn list(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn get(&self, id: u64) -> Option<MenuItem> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    /// Partial update. Empty strings and zero prices are treated as unset,
    /// so those values cannot be written through this path.
    pub fn update(&self, id: u64, patch: &UpdateMenuItemRequest) -> Option<MenuItem> {
        let mut entry = self.items.get_mut(&id)?;
        let item = entry.value_mut();

        if let Some(name) = patch.name.as_deref().filter(|s| !s.is_empty()) {
            item.name = name.to_string();
        }
        if let Some(description) = patch.description.as_deref().filter(|s| !s.is_empty()) {
            item.description = description.to_string();
        }
        if let Some(price) = patch.price.filter(|p| *p != 0.0) {
            item.price = price;
        }
        if let Some(category) = patch.category.as_deref().filter(|s| !s.is_empty()) {
            item.category = category.to_string();
        }

        Some(item.clone())
    }

    /// Remove an item, returning the removed record if it existed
    pub fn remove(&self, id: u64) -> Option<MenuItem> {
        self.items.remove(&id).map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}
