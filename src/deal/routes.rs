use axum::{Router, routing::get};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new().route("/deals", get(handlers::get_active_deals))
}
