use crate::models::user::{Role, User};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory store for user records
///
/// Emails are matched exactly (case-sensitive), so "A@x.com" and "a@x.com"
/// are distinct accounts.
pub struct UserStore {
    users: DashMap<u64, Arc<User>>,
    by_email: DashMap<String, u64>,
    next_id: AtomicU64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            by_email: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Insert a new user, assigning the next sequential id.
    /// Returns None if the email is already taken; the uniqueness check and
    /// the reservation happen under a single email-index entry.
    pub fn insert(
        &self,
        name: String,
        email: String,
        password_hash: String,
        room_number: String,
        role: Role,
    ) -> Option<Arc<User>> {
        match self.by_email.entry(email.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let user = Arc::new(User {
                    id,
                    name,
                    email,
                    password_hash,
                    room_number,
                    role,
                });
                self.users.insert(id, Arc::clone(&user));
                slot.insert(id);
                Some(user)
            }
        }
    }

    /// Get a user by id
    pub fn get(&self, id: u64) -> Option<Arc<User>> {
        self.users.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Look up a user by exact email match
    pub fn find_by_email(&self, email: &str) -> Option<Arc<User>> {
        self.by_email
            .get(email)
            .and_then(|entry| self.get(*entry.value()))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
