use super::models::{NewUser, NewUserPayload, SafeUser};
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, State};
use bcrypt::{DEFAULT_COST, hash};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use validator::Validate;

pub async fn create_user(
    State(pool): State<Pool>,
    Json(payload): Json<NewUserPayload>,
) -> Result<Json<SafeUser>, AppError> {
    use crate::schema::users;

    payload.validate()?;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let hashed_pass = create_password_hash(payload.password).await?;

    let user_data = NewUser {
        full_name: payload.full_name,
        email: payload.email,
        password_hash: hashed_pass,
        role: payload.role,
        student_verified: payload.student_verified,
    };

    let res = diesel::insert_into(users::table)
        .values(&user_data)
        .returning(SafeUser::as_returning())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_user_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<SafeUser>, AppError> {
    use crate::schema::users;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = users::table
        .find(id)
        .select(SafeUser::as_select())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_all_users(State(pool): State<Pool>) -> Result<Json<Vec<SafeUser>>, AppError> {
    use crate::schema::users;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = users::table
        .select(SafeUser::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn create_password_hash(password: String) -> Result<String, AppError> {
    let hashed_password = tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Hashing error: {}", e)))?;

    Ok(hashed_password)
}
