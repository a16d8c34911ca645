use axum::extract::rejection::FormRejection;
use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use shoplab_domain::id::{CartItemId, ProductId};
use shoplab_session::identity::SessionUser;

use crate::error::ShopError;
use crate::handlers::{form_or_default, non_empty};
use crate::state::AppState;
use crate::usecase::cart::{AddToCartUseCase, GetCartUseCase, RemoveFromCartUseCase};

// ── GET /cart ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartLineResponse {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price_cents: i32,
    pub image_url: String,
    pub quantity: i32,
}

pub async fn get_cart(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<CartLineResponse>>, ShopError> {
    let usecase = GetCartUseCase {
        cart: state.cart_repo(),
    };
    let lines = usecase.execute(session.user_id).await?;
    Ok(Json(
        lines
            .into_iter()
            .map(|l| CartLineResponse {
                id: l.id.0,
                product_id: l.product_id.0,
                name: l.name,
                price_cents: l.price_cents,
                image_url: l.image_url.unwrap_or_default(),
                quantity: l.quantity,
            })
            .collect(),
    ))
}

// ── POST /cart/add ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AddToCartForm {
    pub product_id: Option<String>,
}

pub async fn add_to_cart(
    session: SessionUser,
    State(state): State<AppState>,
    form: Result<Form<AddToCartForm>, FormRejection>,
) -> Result<&'static str, ShopError> {
    let form = form_or_default(form);
    let raw = non_empty(form.product_id).ok_or(ShopError::Missing("product_id"))?;
    let usecase = AddToCartUseCase {
        cart: state.cart_repo(),
        products: state.product_repo(),
    };
    usecase
        .execute(session.user_id, ProductId::parse_lenient(&raw))
        .await?;
    Ok("added to cart")
}

// ── POST /cart/remove ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RemoveFromCartForm {
    pub cart_id: Option<String>,
}

pub async fn remove_from_cart(
    session: SessionUser,
    State(state): State<AppState>,
    form: Result<Form<RemoveFromCartForm>, FormRejection>,
) -> Result<&'static str, ShopError> {
    let form = form_or_default(form);
    let raw = non_empty(form.cart_id).ok_or(ShopError::Missing("cart_id"))?;
    let usecase = RemoveFromCartUseCase {
        cart: state.cart_repo(),
    };
    usecase
        .execute(session.user_id, CartItemId::parse_lenient(&raw))
        .await?;
    Ok("removed from cart")
}
