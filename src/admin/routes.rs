use axum::{Router, routing::get};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/admins",
            get(handlers::get_all_admins).post(handlers::create_admin),
        )
        .route("/admins/{id}", get(handlers::get_admin_by_id))
}
