use super::models::{DashboardData, DashboardEnvelope, DashboardStats, Earnings};
use crate::auth::models::AccessTokenClaims;
use crate::message::models::Message;
use crate::product::models::Product;
use crate::rental::models::{Rental, RentalRecord};
use crate::user::models::{Role, SafeUser};
use crate::utils::AppError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

/// One aggregated read feeding every dashboard tab.
pub async fn get_dashboard(
    State(pool): State<Pool>,
    claims: AccessTokenClaims,
) -> Result<Json<DashboardEnvelope>, AppError> {
    use crate::schema::{messages, products, rentals, users};

    if !matches!(claims.role, Role::Seller | Role::Admin) {
        return Err(AppError::Forbidden);
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    let seller = users::table
        .find(claims.sub)
        .select(SafeUser::as_select())
        .get_result(&mut conn)
        .await?;

    let listings = products::table
        .filter(products::seller_id.eq(claims.sub))
        .select(Product::as_select())
        .load(&mut conn)
        .await?;

    let inbox = messages::table
        .filter(messages::recipient_id.eq(claims.sub))
        .order(messages::sent_at.desc())
        .select(Message::as_select())
        .load(&mut conn)
        .await?;

    let rental_rows: Vec<(Rental, String)> = rentals::table
        .inner_join(products::table)
        .filter(products::seller_id.eq(claims.sub))
        .order(rentals::started_on.desc())
        .select((Rental::as_select(), products::title))
        .load(&mut conn)
        .await?;

    let rental_history: Vec<RentalRecord> = rental_rows
        .into_iter()
        .map(|(rental, title)| RentalRecord::from_parts(rental, title))
        .collect();

    let earnings = Earnings::from_history(&rental_history);
    let stats = DashboardStats::from_parts(&listings, &inbox);

    Ok(Json(DashboardEnvelope {
        success: true,
        data: Some(DashboardData {
            seller,
            listings,
            messages: inbox,
            rental_history,
            earnings,
            stats,
        }),
    }))
}
