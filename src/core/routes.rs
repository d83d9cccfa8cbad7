// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(crate::handlers::auth::login_handler))
        .route("/api/auth/signup", post(crate::handlers::auth::signup_handler))
        .route("/api/auth/logout", post(crate::handlers::auth::logout_handler))

        // Profile endpoints (require bearer token)
        .route(
            "/api/users/profile",
            get(crate::handlers::users::profile_handler)
                .put(crate::handlers::users::update_profile_handler),
        )

        // Menu catalog: reads are public, mutations require a bearer token
        .route(
            "/api/menu",
            get(crate::handlers::menu::menu_list_handler)
                .post(crate::handlers::menu::menu_create_handler),
        )
        .route(
            "/api/menu/{id}",
            get(crate::handlers::menu::menu_get_handler)
                .put(crate::handlers::menu::menu_update_handler)
                .delete(crate::handlers::menu::menu_delete_handler),
        )

        // Order ledger (all require a bearer token)
        .route(
            "/api/orders",
            get(crate::handlers::orders::orders_list_handler)
                .post(crate::handlers::orders::order_create_handler),
        )
        .route(
            "/api/orders/{id}",
            get(crate::handlers::orders::order_get_handler)
                .put(crate::handlers::orders::order_status_handler)
                .delete(crate::handlers::orders::order_cancel_handler),
        )

        .route("/api/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
