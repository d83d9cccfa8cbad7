use crate::auth::token;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::user::Role;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::sync::Arc;

/// The claim set resolved from a verified bearer token, attached to a
/// request by extraction. Carries whatever the token says; the user store is
/// not consulted, so role changes or deletions only take effect once the
/// caller re-authenticates.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: u64,
    pub email: String,
    pub role: Role,
}

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.split_whitespace().nth(1))
            .ok_or(AuthError::MissingToken)?;

        let claims = token::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Identity {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::issue;
    use crate::core::state::tests::create_test_state;
    use crate::models::user::User;
    use axum::http::Request;

    fn student() -> User {
        User {
            id: 2,
            name: "Test Student".to_string(),
            email: "student@example.com".to_string(),
            password_hash: "hash".to_string(),
            room_number: "102".to_string(),
            role: Role::Student,
        }
    }

    async fn extract(header: Option<&str>) -> Result<Identity, AuthError> {
        let state = create_test_state();
        let mut builder = Request::builder().uri("/api/orders");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        Identity::from_request_parts(&mut parts, &state).await
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let token = issue(&student(), "test-jwt-secret", 3600).unwrap();
        let identity = extract(Some(&format!("Bearer {token}"))).await.unwrap();

        assert_eq!(identity.id, 2);
        assert_eq!(identity.email, "student@example.com");
        assert_eq!(identity.role, Role::Student);
    }

    #[tokio::test]
    async fn test_missing_header() {
        assert!(matches!(extract(None).await, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_header_without_token_part() {
        let result = extract(Some("Bearer")).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let result = extract(Some("Bearer not.a.token")).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let token = issue(&student(), "another-secret", 3600).unwrap();
        let result = extract(Some(&format!("Bearer {token}"))).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
