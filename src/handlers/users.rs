use crate::auth::identity::Identity;
use crate::models::auth::{Profile, UpdateProfileRequest, UpdatedProfile};
use crate::models::response::ApiResponse;
use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/users/profile
///
/// Echoes the claims from the verified token; the user store is not consulted.
pub async fn profile_handler(identity: Identity) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::data(Profile {
            id: identity.id,
            email: identity.email,
            role: identity.role,
        })),
    )
        .into_response()
}

/// PUT /api/users/profile
///
/// Returns the merged profile. The write is not persisted to the user store.
pub async fn update_profile_handler(
    identity: Identity,
    Json(body): Json<UpdateProfileRequest>,
) -> Response {
    let updated = UpdatedProfile {
        id: identity.id,
        email: identity.email,
        name: body.name.unwrap_or_default(),
        room_number: body.room_number.unwrap_or_default(),
        phone: body.phone.unwrap_or_default(),
        role: identity.role,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Profile updated successfully",
            updated,
        )),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use http_body_util::BodyExt;

    fn student() -> Identity {
        Identity {
            id: 2,
            email: "student@example.com".to_string(),
            role: Role::Student,
        }
    }

    #[tokio::test]
    async fn test_profile_echoes_claims() {
        let response = profile_handler(student()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ApiResponse<Profile> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.data.id, 2);
        assert_eq!(body.data.email, "student@example.com");
    }

    #[tokio::test]
    async fn test_update_profile_merges_fields() {
        let body = UpdateProfileRequest {
            name: Some("Ama".to_string()),
            room_number: Some("B12".to_string()),
            phone: None,
        };

        let response = update_profile_handler(student(), Json(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ApiResponse<UpdatedProfile> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.data.name, "Ama");
        assert_eq!(body.data.room_number, "B12");
        assert_eq!(body.data.phone, "");
        assert_eq!(body.data.email, "student@example.com");
    }
}
