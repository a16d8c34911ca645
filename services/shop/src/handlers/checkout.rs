use axum::{Json, extract::State};
use serde::Serialize;

use shoplab_session::identity::SessionUser;

use crate::domain::types::ORDER_PLACED_MESSAGE;
use crate::error::ShopError;
use crate::state::AppState;
use crate::usecase::checkout::{CheckoutUseCase, ListOrdersUseCase};

// ── POST /checkout ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub order_id: i32,
    pub total_cents: i64,
    pub message: &'static str,
}

pub async fn checkout(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<CheckoutResponse>, ShopError> {
    let usecase = CheckoutUseCase {
        cart: state.cart_repo(),
        orders: state.order_repo(),
    };
    let placed = usecase.execute(session.user_id).await?;
    Ok(Json(CheckoutResponse {
        order_id: placed.order_id.0,
        total_cents: placed.total_cents,
        message: ORDER_PLACED_MESSAGE,
    }))
}

// ── GET /orders ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub total_cents: i64,
    #[serde(serialize_with = "shoplab_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn list_orders(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ShopError> {
    let usecase = ListOrdersUseCase {
        orders: state.order_repo(),
    };
    let orders = usecase.execute(session.user_id).await?;
    Ok(Json(
        orders
            .into_iter()
            .map(|o| OrderResponse {
                id: o.id.0,
                total_cents: o.total_cents,
                created_at: o.created_at,
            })
            .collect(),
    ))
}
