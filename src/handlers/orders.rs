use crate::auth::identity::Identity;
use crate::core::error::OrderError;
use crate::core::state::AppState;
use crate::models::order::{CreateOrderRequest, OrderLine, OrderStatus, UpdateStatusRequest};
use crate::models::response::ApiResponse;
use crate::stores::order_store::CancelError;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Pricing seam: the submitted total is accepted verbatim today. Recomputing
/// it from authoritative catalog prices would slot in here without touching
/// the ledger contract.
fn verified_total(_items: &[OrderLine], submitted: f64) -> f64 {
    submitted
}

/// GET /api/orders
///
/// Only the caller's own orders, in insertion order.
pub async fn orders_list_handler(
    identity: Identity,
    State(state): State<Arc<AppState>>,
) -> Response {
    let orders = state.orders.list_for_user(identity.id);

    (StatusCode::OK, Json(ApiResponse::data(orders))).into_response()
}

/// GET /api/orders/{id}
///
/// 404 for an unknown id, 403 when the order exists but belongs to someone
/// else.
pub async fn order_get_handler(
    identity: Identity,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Response, OrderError> {
    let order = state.orders.get(id).ok_or(OrderError::NotFound)?;

    if order.user_id != identity.id {
        return Err(OrderError::Forbidden);
    }

    Ok((StatusCode::OK, Json(ApiResponse::data(order))).into_response())
}

/// POST /api/orders
///
/// Turns the submitted cart into an order: stamps the caller as owner,
/// Pending status, creation time and the next id. A missing or zero total
/// reads as invalid, and the total is otherwise trusted as submitted.
pub async fn order_create_handler(
    identity: Identity,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Response, OrderError> {
    let items = body
        .items
        .filter(|items| !items.is_empty())
        .ok_or(OrderError::InvalidOrder)?;
    let total = body
        .total_price
        .filter(|t| *t != 0.0)
        .ok_or(OrderError::InvalidOrder)?;

    let total = verified_total(&items, total);
    let order = state.orders.create(identity.id, items, total);

    info!(
        order_id = order.id,
        user_id = identity.id,
        total_price = order.total_price,
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::data(order))).into_response())
}

/// PUT /api/orders/{id}
///
/// Overwrites the status. Any authenticated caller may set any order to any
/// of the four known states; there is no ownership check and no transition
/// ordering.
pub async fn order_status_handler(
    _identity: Identity,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Response, OrderError> {
    if state.orders.get(id).is_none() {
        return Err(OrderError::NotFound);
    }

    let status = body.status.ok_or(OrderError::StatusRequired)?;
    let status = OrderStatus::parse(&status).ok_or(OrderError::InvalidStatus)?;

    let order = state
        .orders
        .set_status(id, status)
        .ok_or(OrderError::NotFound)?;

    info!(order_id = id, status = ?order.status, "Order status updated");

    Ok((StatusCode::OK, Json(ApiResponse::data(order))).into_response())
}

/// DELETE /api/orders/{id}
///
/// Cancellation is a hard delete, allowed only to the owner and only while
/// the order is still Pending.
pub async fn order_cancel_handler(
    identity: Identity,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Response, OrderError> {
    let order = state.orders.cancel(id, identity.id).map_err(|e| match e {
        CancelError::NotFound => OrderError::NotFound,
        CancelError::NotOwner => {
            warn!(order_id = id, user_id = identity.id, "Cancel refused: not the owner");
            OrderError::Forbidden
        }
        CancelError::NotPending => OrderError::NotPending,
    })?;

    info!(order_id = id, user_id = identity.id, "Order cancelled");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Order cancelled", order)),
    )
        .into_response())
}
