//! One-shot database seeding. Reverts and re-runs every migration, then
//! bulk-inserts fixture products and deals. Destroys existing data; not
//! meant to run against anything but a development database.

use anyhow::{Context, Result, anyhow};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use axum_rentals::MIGRATIONS;
use axum_rentals::deal::models::NewDeal;
use axum_rentals::product::models::{ListingStatus, NewProduct};

fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = run() {
        error!("seed failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut conn = axum_rentals::establish_connection(&db_url)
        .map_err(|e| anyhow!("failed to connect to {db_url}: {e}"))?;

    warn!("resyncing schema: all existing rows will be dropped");
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("failed to revert migrations: {e}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("failed to run migrations: {e}"))?;
    info!("schema recreated");

    use axum_rentals::schema::{deals, products};

    let inserted = diesel::insert_into(products::table)
        .values(&product_fixtures())
        .execute(&mut conn)?;
    info!("inserted {inserted} products");

    let inserted = diesel::insert_into(deals::table)
        .values(&deal_fixtures())
        .execute(&mut conn)?;
    info!("inserted {inserted} deals");

    info!("seed complete");
    Ok(())
}

fn product(title: &str, price: f64, category: &str, image: &str) -> NewProduct {
    NewProduct {
        title: title.to_owned(),
        price,
        description: None,
        location: Some("West Lafayette".to_owned()),
        category: Some(category.to_owned()),
        image: image.to_owned(),
        badges: None,
        status: None,
        seller_id: None,
    }
}

fn product_fixtures() -> Vec<NewProduct> {
    vec![
        NewProduct {
            description: Some("Full-frame mirrorless, two batteries and a 64GB card".to_owned()),
            badges: Some(vec!["Top Rated".to_owned(), "Insured".to_owned()]),
            ..product("Canon EOS R6", 45.0, "Cameras", "/images/canon-r6.jpg")
        },
        NewProduct {
            badges: Some(vec!["Free Paddle".to_owned()]),
            ..product("Two-person kayak", 30.0, "Outdoors", "/images/kayak.jpg")
        },
        NewProduct {
            status: Some(ListingStatus::Pending),
            ..product("DeWalt hammer drill", 12.5, "Tools", "/images/drill.jpg")
        },
        NewProduct {
            description: Some("Sleeps four, waterproof fly included".to_owned()),
            ..product("4-person dome tent", 18.0, "Outdoors", "/images/tent.jpg")
        },
        NewProduct {
            status: Some(ListingStatus::Inactive),
            ..product("1080p projector", 22.0, "Electronics", "/images/projector.jpg")
        },
        NewProduct {
            badges: Some(vec!["Helmet Included".to_owned()]),
            ..product("Commuter bike", 15.0, "Bikes", "/images/bike.jpg")
        },
    ]
}

fn deal_fixtures() -> Vec<NewDeal> {
    let ends_at = NaiveDate::from_ymd_opt(2026, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    vec![
        NewDeal {
            title: "Welcome week".to_owned(),
            description: "25% off your first rental".to_owned(),
            discount: BigDecimal::from(25),
            image: "/images/deal-welcome.jpg".to_owned(),
            badge: "New".to_owned(),
            is_active: None,
            ends_at,
        },
        NewDeal {
            title: "Outdoor season".to_owned(),
            description: "15% off all outdoor gear".to_owned(),
            discount: BigDecimal::from(15),
            image: "/images/deal-outdoors.jpg".to_owned(),
            badge: "Seasonal".to_owned(),
            is_active: None,
            ends_at,
        },
        NewDeal {
            title: "Student weekend".to_owned(),
            description: "10% off for verified students".to_owned(),
            discount: BigDecimal::from(10),
            image: "/images/deal-student.jpg".to_owned(),
            badge: "Students".to_owned(),
            is_active: Some(false),
            ends_at,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn product_fixtures_pass_payload_validation() {
        let fixtures = product_fixtures();
        assert!(!fixtures.is_empty());
        for fixture in &fixtures {
            fixture.validate().unwrap();
        }
    }

    #[test]
    fn deal_fixtures_are_well_formed() {
        let fixtures = deal_fixtures();
        assert!(!fixtures.is_empty());
        for fixture in &fixtures {
            assert!(!fixture.title.is_empty());
            assert!(fixture.discount > BigDecimal::from(0));
        }
    }
}
