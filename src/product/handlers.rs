use super::models::{NewProduct, Product};
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use validator::Validate;

pub async fn create_product(
    State(pool): State<Pool>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>, AppError> {
    use crate::schema::products;

    payload.validate()?;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(products::table)
        .values(&payload)
        .returning(Product::as_returning())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_products(State(pool): State<Pool>) -> Result<Json<Vec<Product>>, AppError> {
    use crate::schema::products;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = products::table
        .select(Product::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(res))
}

pub async fn get_product_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    use crate::schema::products;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = products::table
        .find(id)
        .select(Product::as_select())
        .get_result(&mut conn)
        .await?;

    Ok(Json(res))
}
