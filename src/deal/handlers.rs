use super::models::Deal;
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn get_active_deals(State(pool): State<Pool>) -> Result<Json<Vec<Deal>>, AppError> {
    use crate::schema::deals;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = deals::table
        .filter(deals::is_active.eq(true))
        .select(Deal::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(res))
}
