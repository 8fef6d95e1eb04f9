use super::models::{AccessTokenClaims, LoginPayload, LoginResponse, encode_access_token};
use crate::user::models::{SafeUser, User};
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, State};
use bcrypt::verify;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn login_user(
    State(pool): State<Pool>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    use crate::schema::users;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let user = users::table
        .filter(users::email.eq(&payload.email))
        .select(User::as_select())
        .get_result(&mut conn)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let password = payload.password;
    let hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Verify error: {}", e)))?;

    if !matches {
        return Err(AppError::Unauthorized);
    }

    let safe_user = SafeUser {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        role: user.role,
        student_verified: user.student_verified,
    };

    let claims = AccessTokenClaims::for_user(&safe_user);
    let token = encode_access_token(&claims)?;

    Ok(Json(LoginResponse {
        token,
        user_role: safe_user.role,
        user: safe_user,
    }))
}
