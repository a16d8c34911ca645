use shoplab_domain::id::UserId;

use crate::domain::repository::{CartRepository, OrderRepository};
use crate::domain::types::{Order, PlacedOrder};
use crate::error::ShopError;

// ── Checkout ─────────────────────────────────────────────────────────────────

pub struct CheckoutUseCase<C: CartRepository, O: OrderRepository> {
    pub cart: C,
    pub orders: O,
}

impl<C: CartRepository, O: OrderRepository> CheckoutUseCase<C, O> {
    /// Turn the user's cart into an order.
    ///
    /// The four steps run as separate statements with no surrounding
    /// transaction. Lines added between the copy and the clear are dropped,
    /// and a failure after `create` leaves an order without items.
    pub async fn execute(&self, user_id: UserId) -> Result<PlacedOrder, ShopError> {
        let total_cents = self.cart.total_cents(user_id).await?;
        if total_cents == 0 {
            return Err(ShopError::EmptyCart);
        }

        let order_id = self.orders.create(user_id, total_cents).await?;
        let lines = self.orders.copy_cart_lines(order_id, user_id).await?;
        self.cart.clear(user_id).await?;

        tracing::info!(%user_id, %order_id, total_cents, lines, "order placed");
        Ok(PlacedOrder {
            order_id,
            total_cents,
        })
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> ListOrdersUseCase<O> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Order>, ShopError> {
        self.orders.list_by_user(user_id).await
    }
}
