use anyhow::{Context, Result};
use tracing::info;

use crate::auth::password::hash_password;
use crate::core::state::AppState;
use crate::models::order::OrderLine;
use crate::models::user::Role;

// Fixed seed data: one admin, one student, five menu items and one pending
// order for the student. The admin seed is the only admin account; signup
// always produces students.
pub fn seed(state: &AppState) -> Result<()> {
    let admin_hash = hash_password("Admin@123").context("Failed to hash admin seed password")?;
    state.users.insert(
        "Admin User".to_string(),
        "admin@example.com".to_string(),
        admin_hash,
        "001".to_string(),
        Role::Admin,
    );

    let student_hash =
        hash_password("Password123").context("Failed to hash student seed password")?;
    state.users.insert(
        "Test Student".to_string(),
        "student@example.com".to_string(),
        student_hash,
        "102".to_string(),
        Role::Student,
    );

    let items = [
        ("Jollof Rice", "Delicious spiced rice", 15.00, "Rice"),
        ("Fufu", "Pounded cassava and plantain", 12.00, "Fufu"),
        ("Waakye", "Rice and beans with sauce", 10.00, "Rice"),
        ("Kebab", "Grilled meat skewers", 18.00, "Meat"),
        ("Fried Rice", "Spicy fried rice with vegetables", 14.00, "Rice"),
    ];
    for (name, description, price, category) in items {
        state.menu.insert(
            name.to_string(),
            description.to_string(),
            price,
            category.to_string(),
        );
    }

    // Sample order owned by the seeded student
    state.orders.create(
        2,
        vec![OrderLine {
            id: 1,
            name: "Jollof Rice".to_string(),
            price: 15.00,
            quantity: 2,
        }],
        30.00,
    );

    info!(
        users = state.users.len(),
        menu_items = state.menu.len(),
        orders = state.orders.len(),
        "Seed data loaded"
    );

    Ok(())
}
