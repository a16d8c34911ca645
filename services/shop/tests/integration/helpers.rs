use std::sync::{Arc, Mutex};

use chrono::{Duration, TimeZone, Utc};

use shoplab::domain::repository::{
    CartRepository, OrderRepository, ProductRepository, UserRepository,
};
use shoplab::domain::types::{CartLine, LoginMatch, NewProduct, Order, Product, User};
use shoplab::error::ShopError;
use shoplab_domain::id::{CartItemId, OrderId, ProductId, UserId};

// ── InMemoryShop ─────────────────────────────────────────────────────────────

/// One in-memory store implementing every repository trait. Clones share
/// state, so a test can hand clones to a use case and inspect afterwards.
#[derive(Clone, Default)]
pub struct InMemoryShop {
    pub inner: Arc<Mutex<ShopTables>>,
}

#[derive(Default)]
pub struct ShopTables {
    pub users: Vec<(User, String)>,
    pub products: Vec<Product>,
    pub cart: Vec<CartRow>,
    pub orders: Vec<OrderRow>,
    pub order_items: Vec<OrderItemRow>,
    next_id: i32,
}

#[derive(Debug, Clone)]
pub struct CartRow {
    pub id: i32,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order: Order,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRow {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price_cents: i32,
}

impl ShopTables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn price_of(&self, product_id: ProductId) -> i32 {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .map_or(0, |p| p.price_cents)
    }
}

impl InMemoryShop {
    /// Store seeded with the admin, alice and two products.
    pub fn seeded() -> Self {
        let shop = Self::default();
        shop.add_user("admin@shop.local", "admin123", true);
        shop.add_user("alice@example.com", "alicepass", false);
        shop.add_product("Faded Jeans", 6300);
        shop.add_product("Black Jeans", 7200);
        shop
    }

    pub fn add_user(&self, email: &str, password: &str, is_admin: bool) -> UserId {
        let mut t = self.inner.lock().unwrap();
        let id = UserId(t.next_id());
        t.users.push((
            User {
                id,
                email: email.to_owned(),
                is_admin,
            },
            password.to_owned(),
        ));
        id
    }

    pub fn add_product(&self, name: &str, price_cents: i32) -> ProductId {
        let mut t = self.inner.lock().unwrap();
        let id = ProductId(t.next_id());
        t.products.push(Product {
            id,
            name: name.to_owned(),
            description: None,
            price_cents,
            image_url: Some(format!("http://localhost:8080/local-image?id={}", id.0)),
        });
        id
    }

    pub fn user_id(&self, email: &str) -> UserId {
        self.inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.id)
            .expect("seeded user")
    }

    pub fn product_id(&self, name: &str) -> ProductId {
        self.inner
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
            .expect("seeded product")
    }

    pub fn cart_rows(&self, user_id: UserId) -> Vec<CartRow> {
        self.inner
            .lock()
            .unwrap()
            .cart
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn orders(&self) -> Vec<OrderRow> {
        self.inner.lock().unwrap().orders.clone()
    }

    pub fn order_items(&self) -> Vec<OrderItemRow> {
        self.inner.lock().unwrap().order_items.clone()
    }
}

impl UserRepository for InMemoryShop {
    async fn create(&self, email: &str, password: &str) -> Result<(), ShopError> {
        let mut t = self.inner.lock().unwrap();
        if t.users.iter().any(|(u, _)| u.email == email) {
            return Err(ShopError::Registration(anyhow::anyhow!(
                "duplicate key value violates unique constraint \"users_email_key\""
            )));
        }
        let id = UserId(t.next_id());
        t.users.push((
            User {
                id,
                email: email.to_owned(),
                is_admin: false,
            },
            password.to_owned(),
        ));
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ShopError> {
        let t = self.inner.lock().unwrap();
        Ok(t.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<LoginMatch>, ShopError> {
        let t = self.inner.lock().unwrap();
        Ok(t
            .users
            .iter()
            .find(|(u, pw)| u.email == email && pw == password)
            .map(|(u, _)| LoginMatch {
                id: u.id,
                is_admin: u.is_admin,
            }))
    }
}

impl ProductRepository for InMemoryShop {
    async fn list_all(&self) -> Result<Vec<Product>, ShopError> {
        let t = self.inner.lock().unwrap();
        let mut products = t.products.clone();
        products.sort_by_key(|p| p.id.0);
        Ok(products)
    }

    async fn exists(&self, id: ProductId) -> Result<bool, ShopError> {
        Ok(self.inner.lock().unwrap().products.iter().any(|p| p.id == id))
    }

    async fn create(&self, product: &NewProduct) -> Result<(), ShopError> {
        let mut t = self.inner.lock().unwrap();
        let id = ProductId(t.next_id());
        t.products.push(Product {
            id,
            name: product.name.clone(),
            description: Some(product.description.clone()),
            price_cents: product.price_cents,
            image_url: Some(product.image_url.clone()),
        });
        Ok(())
    }
}

impl CartRepository for InMemoryShop {
    async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, ShopError> {
        let t = self.inner.lock().unwrap();
        Ok(t.cart
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                let p = t.products.iter().find(|p| p.id == r.product_id)?;
                Some(CartLine {
                    id: CartItemId(r.id),
                    product_id: p.id,
                    name: p.name.clone(),
                    price_cents: p.price_cents,
                    image_url: p.image_url.clone(),
                    quantity: r.quantity,
                })
            })
            .collect())
    }

    async fn add_one(&self, user_id: UserId, product_id: ProductId) -> Result<(), ShopError> {
        let mut t = self.inner.lock().unwrap();
        if let Some(row) = t
            .cart
            .iter_mut()
            .find(|r| r.user_id == user_id && r.product_id == product_id)
        {
            row.quantity += 1;
            return Ok(());
        }
        let id = t.next_id();
        t.cart.push(CartRow {
            id,
            user_id,
            product_id,
            quantity: 1,
        });
        Ok(())
    }

    async fn remove(&self, user_id: UserId, cart_id: CartItemId) -> Result<(), ShopError> {
        self.inner
            .lock()
            .unwrap()
            .cart
            .retain(|r| !(r.id == cart_id.0 && r.user_id == user_id));
        Ok(())
    }

    async fn total_cents(&self, user_id: UserId) -> Result<i64, ShopError> {
        let t = self.inner.lock().unwrap();
        Ok(t.cart
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| i64::from(t.price_of(r.product_id)) * i64::from(r.quantity))
            .sum())
    }

    async fn clear(&self, user_id: UserId) -> Result<(), ShopError> {
        self.inner
            .lock()
            .unwrap()
            .cart
            .retain(|r| r.user_id != user_id);
        Ok(())
    }
}

impl OrderRepository for InMemoryShop {
    async fn create(&self, user_id: UserId, total_cents: i64) -> Result<OrderId, ShopError> {
        let mut t = self.inner.lock().unwrap();
        let id = OrderId(t.next_id());
        // Strictly increasing timestamps keep "newest first" deterministic.
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
            + Duration::seconds(i64::from(id.0));
        t.orders.push(OrderRow {
            order: Order {
                id,
                total_cents,
                created_at,
            },
            user_id,
        });
        Ok(id)
    }

    async fn copy_cart_lines(
        &self,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<u64, ShopError> {
        let mut t = self.inner.lock().unwrap();
        let items: Vec<OrderItemRow> = t
            .cart
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| OrderItemRow {
                order_id,
                product_id: r.product_id,
                quantity: r.quantity,
                price_cents: t.price_of(r.product_id),
            })
            .collect();
        let copied = items.len() as u64;
        t.order_items.extend(items);
        Ok(copied)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, ShopError> {
        let t = self.inner.lock().unwrap();
        let mut orders: Vec<Order> = t
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .map(|o| o.order.clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
