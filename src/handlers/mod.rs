pub mod auth;
pub mod fallback;
pub mod health;
pub mod menu;
pub mod orders;
pub mod users;
