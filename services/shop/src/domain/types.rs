use chrono::{DateTime, Utc};
use shoplab_domain::id::{CartItemId, OrderId, ProductId, UserId};

/// Shop account as seen by handlers. The plaintext password never leaves the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub is_admin: bool,
}

/// Row returned by a credentials lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginMatch {
    pub id: UserId,
    pub is_admin: bool,
}

/// How the login query is built.
///
/// `Interpolated` splices the submitted email and password straight into the
/// SQL text and is **intentionally injectable** (`' OR 1=1 --`). It exists for
/// the training lab only and is selected by `INSECURE_LOGIN_QUERY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginQueryMode {
    #[default]
    Interpolated,
    Parameterized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image_url: Option<String>,
}

/// Admin-supplied product fields. `image_url` is stored unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub image_url: String,
}

/// A cart row joined with its product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    pub price_cents: i32,
    pub image_url: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub total_cents: i64,
}

/// Identity state reported by `GET /auth/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated(User),
}

/// Plain-text admin panel. Exposes the configured secret to any admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPanel {
    pub email: String,
    pub secret: String,
}

impl AdminPanel {
    pub fn render(&self) -> String {
        format!(
            "ADMIN PANEL\nWelcome {}\nSECRET_KEY = {}\n",
            self.email, self.secret
        )
    }
}

/// Message returned with every placed order.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Catalog images are always served through this relay path.
pub const IMAGE_RELAY_PREFIX: &str = "/image?url=";

/// Rewrite a stored image reference so the browser fetches it via `/image`.
///
/// The original value is appended verbatim, without URL encoding, so stored
/// URLs with their own query strings keep working (and keep feeding the
/// relay whatever an admin typed in).
pub fn relay_image_url(original: &str) -> String {
    format!("{IMAGE_RELAY_PREFIX}{original}")
}
