use super::models::{NewAdmin, NewAdminPayload, SafeAdmin};
use crate::user::handlers::create_password_hash;
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use validator::Validate;

pub async fn create_admin(
    State(pool): State<Pool>,
    Json(payload): Json<NewAdminPayload>,
) -> Result<Json<SafeAdmin>, AppError> {
    use crate::schema::admins;

    payload.validate()?;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let hashed_pass = create_password_hash(payload.password).await?;

    let admin_data = NewAdmin {
        name: payload.name,
        email: payload.email,
        password_hash: hashed_pass,
        status: payload.status,
        rating: payload.rating,
    };

    let res = diesel::insert_into(admins::table)
        .values(&admin_data)
        .returning(SafeAdmin::as_returning())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_admin_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<SafeAdmin>, AppError> {
    use crate::schema::admins;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = admins::table
        .find(id)
        .select(SafeAdmin::as_select())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_all_admins(State(pool): State<Pool>) -> Result<Json<Vec<SafeAdmin>>, AppError> {
    use crate::schema::admins;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = admins::table
        .select(SafeAdmin::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(res))
}
