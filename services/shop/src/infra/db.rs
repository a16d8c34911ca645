use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Statement,
};
use shoplab_domain::id::{CartItemId, OrderId, ProductId, UserId};

use shoplab_schema::{cart, orders, products, users};

use crate::domain::repository::{
    CartRepository, OrderRepository, ProductRepository, UserRepository,
};
use crate::domain::types::{
    CartLine, LoginMatch, LoginQueryMode, NewProduct, Order, Product, User,
};
use crate::error::ShopError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
    pub login_query: LoginQueryMode,
}

#[derive(Debug, FromQueryResult)]
struct LoginRow {
    id: i32,
    is_admin: bool,
}

const PARAMETERIZED_LOGIN_SQL: &str =
    "SELECT id, is_admin FROM users WHERE email = $1 AND password = $2 LIMIT 1";

/// Build the login statement for the configured mode.
///
/// `Interpolated` formats the raw inputs into the SQL text. This is the lab's
/// SQL injection and is kept on purpose; every other query in this module
/// binds its values.
pub fn login_statement(mode: LoginQueryMode, email: &str, password: &str) -> Statement {
    match mode {
        LoginQueryMode::Interpolated => Statement::from_string(
            DbBackend::Postgres,
            format!(
                "SELECT id, is_admin FROM users WHERE email = '{email}' AND password = '{password}' LIMIT 1"
            ),
        ),
        LoginQueryMode::Parameterized => Statement::from_sql_and_values(
            DbBackend::Postgres,
            PARAMETERIZED_LOGIN_SQL,
            [email.into(), password.into()],
        ),
    }
}

impl UserRepository for DbUserRepository {
    async fn create(&self, email: &str, password: &str) -> Result<(), ShopError> {
        let user = users::ActiveModel {
            email: Set(email.to_owned()),
            password: Set(password.to_owned()),
            is_admin: Set(false),
            ..Default::default()
        };
        users::Entity::insert(user)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| ShopError::Registration(e.into()))?;
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ShopError> {
        let model = users::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<LoginMatch>, ShopError> {
        let row = LoginRow::find_by_statement(login_statement(self.login_query, email, password))
            .one(self.db.as_ref())
            .await
            .context("find user by credentials")?;
        Ok(row.map(|r| LoginMatch {
            id: UserId(r.id),
            is_admin: r.is_admin,
        }))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        email: model.email,
        is_admin: model.is_admin,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProductRepository for DbProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ShopError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, ShopError> {
        let model = products::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .context("find product by id")?;
        Ok(model.is_some())
    }

    async fn create(&self, product: &NewProduct) -> Result<(), ShopError> {
        let model = products::ActiveModel {
            name: Set(product.name.clone()),
            description: Set(Some(product.description.clone())),
            price_cents: Set(product.price_cents),
            image_url: Set(Some(product.image_url.clone())),
            ..Default::default()
        };
        products::Entity::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .context("create product")?;
        Ok(())
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: ProductId(model.id),
        name: model.name,
        description: model.description,
        price_cents: model.price_cents,
        image_url: model.image_url,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct CartLineRow {
    id: i32,
    product_id: i32,
    name: String,
    price_cents: i32,
    image_url: Option<String>,
    quantity: i32,
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    total_cents: i64,
}

impl CartRepository for DbCartRepository {
    async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, ShopError> {
        let rows = CartLineRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT c.id, p.id AS product_id, p.name, p.price_cents, p.image_url, c.quantity
            FROM cart c
            JOIN products p ON c.product_id = p.id
            WHERE c.user_id = $1
            ORDER BY c.id
            "#,
            [user_id.0.into()],
        ))
        .all(self.db.as_ref())
        .await
        .context("list cart")?;
        Ok(rows
            .into_iter()
            .map(|r| CartLine {
                id: CartItemId(r.id),
                product_id: ProductId(r.product_id),
                name: r.name,
                price_cents: r.price_cents,
                image_url: r.image_url,
                quantity: r.quantity,
            })
            .collect())
    }

    async fn add_one(&self, user_id: UserId, product_id: ProductId) -> Result<(), ShopError> {
        // Read-modify-write happens inside the statement, but nothing serialises
        // this against a concurrent checkout of the same cart.
        self.db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                r#"
                INSERT INTO cart (user_id, product_id, quantity)
                VALUES ($1, $2, 1)
                ON CONFLICT (user_id, product_id)
                DO UPDATE SET quantity = cart.quantity + 1
                "#,
                [user_id.0.into(), product_id.0.into()],
            ))
            .await
            .context("add to cart")?;
        Ok(())
    }

    async fn remove(&self, user_id: UserId, cart_id: CartItemId) -> Result<(), ShopError> {
        cart::Entity::delete_many()
            .filter(cart::Column::Id.eq(cart_id.0))
            .filter(cart::Column::UserId.eq(user_id.0))
            .exec(self.db.as_ref())
            .await
            .context("remove from cart")?;
        Ok(())
    }

    async fn total_cents(&self, user_id: UserId) -> Result<i64, ShopError> {
        let row = TotalRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT COALESCE(SUM(p.price_cents * c.quantity), 0)::BIGINT AS total_cents
            FROM cart c
            JOIN products p ON c.product_id = p.id
            WHERE c.user_id = $1
            "#,
            [user_id.0.into()],
        ))
        .one(self.db.as_ref())
        .await
        .context("sum cart")?;
        Ok(row.map_or(0, |r| r.total_cents))
    }

    async fn clear(&self, user_id: UserId) -> Result<(), ShopError> {
        cart::Entity::delete_many()
            .filter(cart::Column::UserId.eq(user_id.0))
            .exec(self.db.as_ref())
            .await
            .context("clear cart")?;
        Ok(())
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    id: i32,
}

impl OrderRepository for DbOrderRepository {
    async fn create(&self, user_id: UserId, total_cents: i64) -> Result<OrderId, ShopError> {
        let total = i32::try_from(total_cents).context("order total exceeds INT range")?;
        let row = IdRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "INSERT INTO orders (user_id, total_cents) VALUES ($1, $2) RETURNING id",
            [user_id.0.into(), total.into()],
        ))
        .one(self.db.as_ref())
        .await
        .context("create order")?
        .context("create order returned no id")?;
        Ok(OrderId(row.id))
    }

    async fn copy_cart_lines(
        &self,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<u64, ShopError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price_cents)
                SELECT $1, c.product_id, c.quantity, p.price_cents
                FROM cart c
                JOIN products p ON c.product_id = p.id
                WHERE c.user_id = $2
                "#,
                [order_id.0.into(), user_id.0.into()],
            ))
            .await
            .context("copy cart into order items")?;
        Ok(result.rows_affected())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, ShopError> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id.0))
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list orders")?;
        Ok(models
            .into_iter()
            .map(|m| Order {
                id: OrderId(m.id),
                total_cents: i64::from(m.total_cents),
                created_at: m.created_at,
            })
            .collect())
    }
}
