// Centralized error handling for the API
//
// Each surface (auth, menu, orders) has its own error enum that maps to the
// `{message, error?}` JSON failure body. Internal errors put the raw error
// string in the `error` field; callers rely on that detail.

use crate::models::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

fn error_response(status: StatusCode, message: String, detail: Option<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            message,
            error: detail,
        }),
    )
        .into_response()
}

/// Errors from the auth surface, including bearer-token verification
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email and password required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("All fields required")]
    MissingFields,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::MissingCredentials
            | AuthError::MissingFields
            | AuthError::DuplicateEmail
            | AuthError::WeakPassword { .. } => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match &self {
            AuthError::Internal(e) => Some(e.to_string()),
            _ => None,
        };

        error_response(status, self.to_string(), detail)
    }
}

/// Errors from the menu catalog surface
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Menu item not found")]
    NotFound,

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = match &self {
            MenuError::MissingFields => StatusCode::BAD_REQUEST,
            MenuError::NotFound => StatusCode::NOT_FOUND,
            MenuError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match &self {
            MenuError::Internal(e) => Some(e.to_string()),
            _ => None,
        };

        error_response(status, self.to_string(), detail)
    }
}

/// Errors from the order ledger surface
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid order data")]
    InvalidOrder,

    #[error("Order not found")]
    NotFound,

    #[error("Unauthorized")]
    Forbidden,

    #[error("Status required")]
    StatusRequired,

    #[error("Invalid status")]
    InvalidStatus,

    #[error("Can only cancel pending orders")]
    NotPending,

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::InvalidOrder
            | OrderError::StatusRequired
            | OrderError::InvalidStatus
            | OrderError::NotPending => StatusCode::BAD_REQUEST,
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::Forbidden => StatusCode::FORBIDDEN,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match &self {
            OrderError::Internal(e) => Some(e.to_string()),
            _ => None,
        };

        error_response(status, self.to_string(), detail)
    }
}
