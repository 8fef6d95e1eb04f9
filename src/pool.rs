use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};

pub async fn get_pool(db_url: &str) -> Result<crate::utils::types::Pool, String> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
    let pool = bb8::Pool::builder()
        .build(config)
        .await
        .map_err(|e| format!("Failed to create db pool: {}", e))?;

    Ok(pool)
}
