use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ShopError;
use crate::state::AppState;
use crate::usecase::catalog::ListCatalogUseCase;

// ── GET / ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub image_url: String,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ShopError> {
    let usecase = ListCatalogUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(
        products
            .into_iter()
            .map(|p| ProductResponse {
                id: p.id.0,
                name: p.name,
                description: p.description.unwrap_or_default(),
                price_cents: p.price_cents,
                image_url: p.image_url.unwrap_or_default(),
            })
            .collect(),
    ))
}
