use crate::models::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Route not found".to_string(),
            error: None,
        }),
    )
        .into_response()
}
