use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use shoplab_core::health::healthz;
use shoplab_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    admin::{add_product, admin_panel},
    auth::{auth_status, login, logout, profile, register},
    cart::{add_to_cart, get_cart, remove_from_cart},
    catalog::list_products,
    checkout::{checkout, list_orders},
    health::readyz,
    local_image::local_image,
    preview::preview,
    relay::{image, proxy},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Catalog
        .route("/", get(list_products))
        // Auth
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/auth/status", get(auth_status))
        .route("/profile", get(profile))
        // Admin
        .route("/admin", get(admin_panel))
        .route("/admin/add_product", post(add_product))
        // Relay
        .route("/proxy", get(proxy))
        .route("/image", get(image))
        .route("/local-image", get(local_image))
        // Preview
        .route("/preview", get(preview))
        // Cart
        .route("/cart", get(get_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        // Orders
        .route("/checkout", post(checkout))
        .route("/orders", get(list_orders))
        // Frontend
        .nest_service("/app", static_files)
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
