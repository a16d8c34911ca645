use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::types::LoginQueryMode;
use crate::infra::db::{
    DbCartRepository, DbOrderRepository, DbProductRepository, DbUserRepository,
};
use crate::infra::relay::UnrestrictedRelay;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub relay: UnrestrictedRelay,
    pub login_query: LoginQueryMode,
    pub admin_secret: Arc<str>,
    pub static_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
            login_query: self.login_query,
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: Arc::clone(&self.db),
        }
    }
}
