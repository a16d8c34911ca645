use shoplab_domain::id::UserId;

use crate::domain::repository::{ProductRepository, UserRepository};
use crate::domain::types::{AdminPanel, NewProduct};
use crate::error::ShopError;

// ── AdminPanel ───────────────────────────────────────────────────────────────

pub struct AdminPanelUseCase<'a, U: UserRepository> {
    pub users: U,
    pub secret: &'a str,
}

impl<U: UserRepository> AdminPanelUseCase<'_, U> {
    pub async fn execute(&self, user_id: UserId) -> Result<AdminPanel, ShopError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ShopError::UserNotFound)?;
        if !user.is_admin {
            return Err(ShopError::Forbidden);
        }
        Ok(AdminPanel {
            email: user.email,
            secret: self.secret.to_owned(),
        })
    }
}

// ── AddProduct ───────────────────────────────────────────────────────────────

pub struct AddProductInput {
    pub name: String,
    pub description: String,
    pub price_cents: String,
    pub image_url: String,
}

pub struct AddProductUseCase<U: UserRepository, P: ProductRepository> {
    pub users: U,
    pub products: P,
}

impl<U: UserRepository, P: ProductRepository> AddProductUseCase<U, P> {
    /// Unknown callers get 403 here rather than the panel's 404. Fields are
    /// only checked once the caller is known to be an admin. `image_url` is
    /// stored as given and later fetched by the relay.
    pub async fn execute(&self, user_id: UserId, input: AddProductInput) -> Result<(), ShopError> {
        let is_admin = self
            .users
            .find_by_id(user_id)
            .await?
            .is_some_and(|u| u.is_admin);
        if !is_admin {
            return Err(ShopError::Forbidden);
        }
        let price_cents = input
            .price_cents
            .trim()
            .parse()
            .map_err(|_| ShopError::Invalid("price_cents"))?;
        self.products
            .create(&NewProduct {
                name: input.name,
                description: input.description,
                price_cents,
                image_url: input.image_url,
            })
            .await
    }
}
