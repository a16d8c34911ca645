use axum::extract::rejection::FormRejection;
use axum::{Form, extract::State};
use serde::Deserialize;

use shoplab_session::identity::SessionUser;

use crate::error::ShopError;
use crate::handlers::form_or_default;
use crate::state::AppState;
use crate::usecase::admin::{AddProductInput, AddProductUseCase, AdminPanelUseCase};

// ── GET /admin ───────────────────────────────────────────────────────────────

pub async fn admin_panel(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<String, ShopError> {
    let usecase = AdminPanelUseCase {
        users: state.user_repo(),
        secret: &state.admin_secret,
    };
    let panel = usecase.execute(session.user_id).await?;
    Ok(panel.render())
}

// ── POST /admin/add_product ──────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AddProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_cents: String,
    #[serde(default)]
    pub image_url: String,
}

pub async fn add_product(
    session: SessionUser,
    State(state): State<AppState>,
    form: Result<Form<AddProductForm>, FormRejection>,
) -> Result<&'static str, ShopError> {
    let form = form_or_default(form);
    let usecase = AddProductUseCase {
        users: state.user_repo(),
        products: state.product_repo(),
    };
    usecase
        .execute(
            session.user_id,
            AddProductInput {
                name: form.name,
                description: form.description,
                price_cents: form.price_cents,
                image_url: form.image_url,
            },
        )
        .await?;
    tracing::info!(user_id = %session.user_id, "product added");
    Ok("product added")
}
