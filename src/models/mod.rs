pub mod auth;
pub mod menu;
pub mod order;
pub mod response;
pub mod user;
