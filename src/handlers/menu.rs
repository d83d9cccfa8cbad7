use crate::auth::identity::Identity;
use crate::core::error::MenuError;
use crate::core::state::AppState;
use crate::models::menu::{CreateMenuItemRequest, UpdateMenuItemRequest};
use crate::models::response::ApiResponse;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

/// GET /api/menu (public)
pub async fn menu_list_handler(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::data(state.menu.list())),
    )
        .into_response()
}

/// GET /api/menu/{id} (public)
pub async fn menu_get_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Response, MenuError> {
    let item = state.menu.get(id).ok_or(MenuError::NotFound)?;

    Ok((StatusCode::OK, Json(ApiResponse::data(item))).into_response())
}

/// POST /api/menu
///
/// Requires a verified identity but not the admin role; any authenticated
/// caller can mutate the catalog. A zero price reads as missing.
pub async fn menu_create_handler(
    _identity: Identity,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateMenuItemRequest>,
) -> Result<Response, MenuError> {
    let name = body
        .name
        .filter(|s| !s.is_empty())
        .ok_or(MenuError::MissingFields)?;
    let price = body.price.filter(|p| *p != 0.0).ok_or(MenuError::MissingFields)?;
    let category = body
        .category
        .filter(|s| !s.is_empty())
        .ok_or(MenuError::MissingFields)?;
    let description = body.description.unwrap_or_default();

    let item = state.menu.insert(name, description, price, category);

    info!(item_id = item.id, name = %item.name, "Menu item created");

    Ok((StatusCode::CREATED, Json(ApiResponse::data(item))).into_response())
}

/// PUT /api/menu/{id}
///
/// Partial update: only present, non-empty, non-zero fields are applied.
pub async fn menu_update_handler(
    _identity: Identity,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateMenuItemRequest>,
) -> Result<Response, MenuError> {
    let item = state.menu.update(id, &body).ok_or(MenuError::NotFound)?;

    info!(item_id = id, "Menu item updated");

    Ok((StatusCode::OK, Json(ApiResponse::data(item))).into_response())
}

/// DELETE /api/menu/{id}
pub async fn menu_delete_handler(
    _identity: Identity,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Response, MenuError> {
    let item = state.menu.remove(id).ok_or(MenuError::NotFound)?;

    info!(item_id = id, name = %item.name, "Menu item deleted");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Item deleted", item)),
    )
        .into_response())
}
