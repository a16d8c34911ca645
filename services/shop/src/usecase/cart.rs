use shoplab_domain::id::{CartItemId, ProductId, UserId};

use crate::domain::repository::{CartRepository, ProductRepository};
use crate::domain::types::CartLine;
use crate::error::ShopError;

// ── GetCart ──────────────────────────────────────────────────────────────────

pub struct GetCartUseCase<C: CartRepository> {
    pub cart: C,
}

impl<C: CartRepository> GetCartUseCase<C> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<CartLine>, ShopError> {
        self.cart.list_lines(user_id).await
    }
}

// ── AddToCart ────────────────────────────────────────────────────────────────

pub struct AddToCartUseCase<C: CartRepository, P: ProductRepository> {
    pub cart: C,
    pub products: P,
}

impl<C: CartRepository, P: ProductRepository> AddToCartUseCase<C, P> {
    pub async fn execute(&self, user_id: UserId, product_id: ProductId) -> Result<(), ShopError> {
        if !self.products.exists(product_id).await? {
            return Err(ShopError::ProductNotFound);
        }
        self.cart.add_one(user_id, product_id).await
    }
}

// ── RemoveFromCart ───────────────────────────────────────────────────────────

pub struct RemoveFromCartUseCase<C: CartRepository> {
    pub cart: C,
}

impl<C: CartRepository> RemoveFromCartUseCase<C> {
    /// Scoped to the caller's own rows; anything else is a silent no-op.
    pub async fn execute(&self, user_id: UserId, cart_id: CartItemId) -> Result<(), ShopError> {
        self.cart.remove(user_id, cart_id).await
    }
}
