#![allow(async_fn_in_trait)]

use shoplab_domain::id::{CartItemId, OrderId, ProductId, UserId};

use crate::domain::types::{CartLine, LoginMatch, NewProduct, Order, Product, User};
use crate::error::ShopError;

/// Repository for shop accounts.
pub trait UserRepository: Send + Sync {
    /// Insert a non-admin account. A taken email fails with
    /// [`ShopError::Registration`].
    async fn create(&self, email: &str, password: &str) -> Result<(), ShopError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ShopError>;

    /// Look an account up by email + plaintext password, first match wins.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<LoginMatch>, ShopError>;
}

/// Repository for catalog products.
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id.
    async fn list_all(&self) -> Result<Vec<Product>, ShopError>;

    async fn exists(&self, id: ProductId) -> Result<bool, ShopError>;

    async fn create(&self, product: &NewProduct) -> Result<(), ShopError>;
}

/// Repository for per-user carts.
pub trait CartRepository: Send + Sync {
    async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, ShopError>;

    /// Insert the product with quantity 1, or bump the existing row by one.
    async fn add_one(&self, user_id: UserId, product_id: ProductId) -> Result<(), ShopError>;

    /// Delete a cart row owned by `user_id`. Absent or foreign rows are ignored.
    async fn remove(&self, user_id: UserId, cart_id: CartItemId) -> Result<(), ShopError>;

    /// Sum of `price_cents * quantity` over the cart at current prices.
    async fn total_cents(&self, user_id: UserId) -> Result<i64, ShopError>;

    async fn clear(&self, user_id: UserId) -> Result<(), ShopError>;
}

/// Repository for placed orders and their line items.
pub trait OrderRepository: Send + Sync {
    async fn create(&self, user_id: UserId, total_cents: i64) -> Result<OrderId, ShopError>;

    /// Copy the user's current cart into `order_items`, snapshotting each
    /// product's price. Returns the number of lines copied.
    async fn copy_cart_lines(&self, order_id: OrderId, user_id: UserId)
    -> Result<u64, ShopError>;

    /// The user's orders, newest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, ShopError>;
}
