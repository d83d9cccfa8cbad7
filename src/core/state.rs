// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{menu_store::MenuStore, order_store::OrderStore, user_store::UserStore};
use std::sync::Arc;

/// Shared application state
///
/// One instance per process, constructed at startup and handed to every
/// request handler. Each collection is its own store so tests can isolate
/// behavior with a fresh instance.
#[derive(Clone)]
pub struct AppState {
    /// Credential store: user records and email lookups
    pub users: Arc<UserStore>,

    /// Menu catalog
    pub menu: Arc<MenuStore>,

    /// Order ledger
    pub orders: Arc<OrderStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            menu: Arc::new(MenuStore::new()),
            orders: Arc::new(OrderStore::new()),
            config: Arc::new(config),
        }
    }
}
