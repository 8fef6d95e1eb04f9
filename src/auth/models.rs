use std::env;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::user::models::{Role, SafeUser};
use crate::utils::AppError;

const ACCESS_TOKEN_TTL_HOURS: i64 = 12;

fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "insecure-dev-secret".to_owned())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: i32,
    pub role: Role,
    pub exp: i64,
}

impl AccessTokenClaims {
    pub fn for_user(user: &SafeUser) -> Self {
        Self {
            sub: user.id,
            role: user.role,
            exp: (Utc::now() + Duration::hours(ACCESS_TOKEN_TTL_HOURS)).timestamp(),
        }
    }
}

pub fn encode_access_token(claims: &AccessTokenClaims) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

pub fn decode_access_token(token: &str) -> Result<AccessTokenClaims, AppError> {
    decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

impl<S> FromRequestParts<S> for AccessTokenClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        decode_access_token(token)
    }
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Mirrors the three values the client keeps for the lifetime of a
/// session: the token, the role, and the user itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_role: Role,
    pub user: SafeUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SafeUser {
        SafeUser {
            id: 42,
            full_name: "Ada Seller".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Seller,
            student_verified: true,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_claims() {
        let claims = AccessTokenClaims::for_user(&sample_user());
        let token = encode_access_token(&claims).unwrap();

        let decoded = decode_access_token(&token).unwrap();
        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.role, Role::Seller);
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        assert!(matches!(
            decode_access_token("not-a-jwt"),
            Err(AppError::Unauthorized)
        ));
    }
}
