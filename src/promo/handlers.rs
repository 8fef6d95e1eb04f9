use super::models::{NewPromoCode, PromoCode};
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use validator::Validate;

pub async fn get_all_promos(State(pool): State<Pool>) -> Result<Json<Vec<PromoCode>>, AppError> {
    use crate::schema::promo_codes;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = promo_codes::table
        .select(PromoCode::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn create_promo(
    State(pool): State<Pool>,
    Json(payload): Json<NewPromoCode>,
) -> Result<Json<PromoCode>, AppError> {
    use crate::schema::promo_codes;

    payload.validate()?;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(promo_codes::table)
        .values(&payload)
        .returning(PromoCode::as_returning())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}
