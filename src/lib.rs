use diesel::{ConnectionResult, prelude::*};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod admin;
pub mod auth;
pub mod client;
pub mod config;
pub mod deal;
pub mod message;
pub mod pool;
pub mod product;
pub mod promo;
pub mod rental;
pub mod schema;
pub mod seller;
pub mod user;
pub mod utils;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/");

/// Synchronous connection, used by the seed binary and migration runs.
/// The server goes through the async pool in [`pool`] instead.
pub fn establish_connection(db_url: &str) -> ConnectionResult<PgConnection> {
    PgConnection::establish(db_url)
}
