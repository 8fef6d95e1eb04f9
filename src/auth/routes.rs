use axum::{Router, routing::post};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new().route("/auth/login", post(handlers::login_user))
}
