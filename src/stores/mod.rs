pub mod menu_store;
pub mod order_store;
pub mod user_store;
