use axum::{Router, routing::get};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/users",
            get(handlers::get_all_users).post(handlers::create_user),
        )
        .route("/users/{id}", get(handlers::get_user_by_id))
}
