use axum::{Router, routing::get};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/products",
            get(handlers::get_products).post(handlers::create_product),
        )
        .route("/products/{id}", get(handlers::get_product_by_id))
}
