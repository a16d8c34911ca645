use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use shoplab::config::ShopConfig;
use shoplab::domain::types::LoginQueryMode;
use shoplab::infra::relay::UnrestrictedRelay;
use shoplab::router::build_router;
use shoplab::state::AppState;
use shoplab_migration::{Migrator, MigratorTrait, seed_baseline};

#[tokio::main]
async fn main() {
    shoplab_core::tracing::init_tracing();

    let config = ShopConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    seed_baseline(&db).await.expect("failed to seed database");

    let relay = UnrestrictedRelay::build(config.relay_timeout).expect("failed to build relay");

    if config.login_query == LoginQueryMode::Interpolated {
        tracing::warn!("login query is string-interpolated (INSECURE_LOGIN_QUERY)");
    }

    let state = AppState {
        db: Arc::new(db),
        relay,
        login_query: config.login_query,
        admin_secret: Arc::from(config.admin_secret),
        static_dir: config.static_dir,
        images_dir: config.images_dir,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.shop_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("shop listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
