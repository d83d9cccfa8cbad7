use crate::auth::identity::Identity;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::token;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::models::response::MessageResponse;
use crate::models::user::{PublicUser, Role};
use anyhow::Context;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    let email = non_empty(body.email).ok_or(AuthError::MissingCredentials)?;
    let password = non_empty(body.password).ok_or(AuthError::MissingCredentials)?;

    let user = state
        .users
        .find_by_email(&email)
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash) {
        warn!(email = %email, "Login failed: password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    let token = token::issue(
        &user,
        &state.config.auth.jwt_secret,
        state.config.auth.token_expiry_secs,
    )
    .context("Failed to sign token")?;

    info!(user_id = user.id, "User logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user: PublicUser::from(user.as_ref()),
        }),
    )
        .into_response())
}

/// POST /api/auth/signup
///
/// Every signup gets the student role; there is no public path to an admin
/// account. The duplicate-email check runs before the password-length check.
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> Result<Response, AuthError> {
    let name = non_empty(body.name).ok_or(AuthError::MissingFields)?;
    let email = non_empty(body.email).ok_or(AuthError::MissingFields)?;
    let password = non_empty(body.password).ok_or(AuthError::MissingFields)?;
    let room_number = non_empty(body.room_number).ok_or(AuthError::MissingFields)?;

    if state.users.find_by_email(&email).is_some() {
        return Err(AuthError::DuplicateEmail);
    }

    let min = state.config.auth.min_password_length;
    if password.chars().count() < min {
        return Err(AuthError::WeakPassword { min });
    }

    let password_hash = hash_password(&password)?;

    let user = state
        .users
        .insert(name, email, password_hash, room_number, Role::Student)
        .ok_or(AuthError::DuplicateEmail)?;

    let token = token::issue(
        &user,
        &state.config.auth.jwt_secret,
        state.config.auth.token_expiry_secs,
    )
    .context("Failed to sign token")?;

    info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            token,
            user: PublicUser::from(user.as_ref()),
        }),
    )
        .into_response())
}

/// POST /api/auth/logout
///
/// Stateless: the token stays valid until expiry, the client just drops it.
pub async fn logout_handler(_identity: Identity) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::tests::create_test_state;
    use http_body_util::BodyExt;

    async fn read_auth_response(response: Response) -> AuthResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // bcrypt's minimum cost (the crate keeps its MIN_COST constant private)
    const MIN_COST: u32 = 4;

    fn seed_student(state: &AppState) {
        // MIN_COST keeps login tests fast
        let hash = bcrypt::hash("Password123", MIN_COST).unwrap();
        state.users.insert(
            "Test Student".to_string(),
            "student@example.com".to_string(),
            hash,
            "102".to_string(),
            Role::Student,
        );
    }

    fn signup_body(email: &str) -> SignupRequest {
        SignupRequest {
            name: Some("Ama".to_string()),
            email: Some(email.to_string()),
            password: Some("longpassword1".to_string()),
            room_number: Some("B12".to_string()),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let state = create_test_state();

        let response = signup_handler(State(state.clone()), Json(signup_body("ama@x.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_auth_response(response).await;
        assert_eq!(body.message, "Registration successful");
        assert_eq!(body.user.role, Role::Student);
        assert_eq!(body.user.email, "ama@x.com");

        // The issued token resolves to the new user
        let claims = token::verify(&body.token, "test-jwt-secret").unwrap();
        assert_eq!(claims.id, body.user.id);
        assert!(state.users.find_by_email("ama@x.com").is_some());
    }

    #[tokio::test]
    async fn test_signup_role_in_body_is_ignored() {
        let state = create_test_state();

        // A role field in the request body has no effect
        let body: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "Ama",
            "email": "ama@x.com",
            "password": "longpassword1",
            "roomNumber": "B12",
            "role": "admin"
        }))
        .unwrap();

        let response = signup_handler(State(state), Json(body)).await.unwrap();
        let body = read_auth_response(response).await;
        assert_eq!(body.user.role, Role::Student);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let state = create_test_state();
        seed_student(&state);

        let result = signup_handler(
            State(state),
            Json(signup_body("student@example.com")),
        )
        .await;

        assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_signup_weak_password() {
        let state = create_test_state();

        let mut body = signup_body("ama@x.com");
        body.password = Some("short".to_string());

        let result = signup_handler(State(state), Json(body)).await;
        assert!(matches!(result, Err(AuthError::WeakPassword { min: 8 })));
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let state = create_test_state();

        let mut body = signup_body("ama@x.com");
        body.room_number = None;

        let result = signup_handler(State(state), Json(body)).await;
        assert!(matches!(result, Err(AuthError::MissingFields)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = create_test_state();
        seed_student(&state);

        let body = LoginRequest {
            email: Some("student@example.com".to_string()),
            password: Some("Password123".to_string()),
        };

        let response = login_handler(State(state), Json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_auth_response(response).await;
        assert_eq!(body.message, "Login successful");
        assert_eq!(body.user.email, "student@example.com");
        assert!(token::verify(&body.token, "test-jwt-secret").is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = create_test_state();
        seed_student(&state);

        let body = LoginRequest {
            email: Some("student@example.com".to_string()),
            password: Some("WrongPassword".to_string()),
        };

        let result = login_handler(State(state), Json(body)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let state = create_test_state();

        let body = LoginRequest {
            email: Some("nobody@example.com".to_string()),
            password: Some("Password123".to_string()),
        };

        let result = login_handler(State(state), Json(body)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let state = create_test_state();

        let result = login_handler(State(state), Json(LoginRequest::default())).await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_logout() {
        let identity = Identity {
            id: 2,
            email: "student@example.com".to_string(),
            role: Role::Student,
        };

        let response = logout_handler(identity).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
