use axum::Router;
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use axum_rentals::{admin, auth, config::Config, deal, pool, product, promo, seller, user, utils};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    let pool = pool::get_pool(&config.database_url)
        .await
        .expect("failed to build db pool");

    let routes = Router::new()
        .merge(auth::routes::get_routes())
        .merge(user::routes::get_routes())
        .merge(admin::routes::get_routes())
        .merge(product::routes::get_routes())
        .merge(promo::routes::get_routes())
        .merge(deal::routes::get_routes())
        .merge(seller::routes::get_routes())
        .with_state(pool);

    let app = Router::new()
        .nest("/api", routes)
        .fallback(utils::handler_404);

    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0).unwrap() {
        // if we are given a tcp listener on listen fd 0, we use that one
        Some(listener) => {
            listener.set_nonblocking(true).unwrap();
            TcpListener::from_std(listener).unwrap()
        }
        // otherwise fall back to local listening
        None => TcpListener::bind(format!("127.0.0.1:{}", config.port))
            .await
            .unwrap(),
    };

    info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
