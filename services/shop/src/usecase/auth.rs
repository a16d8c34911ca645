use shoplab_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::{AuthStatus, LoginMatch, User};
use crate::error::ShopError;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<(), ShopError> {
        if email.is_empty() || password.is_empty() {
            return Err(ShopError::Missing("email/password"));
        }
        self.repo.create(email, password).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Resolve credentials to an account. Query failures are reported as bad
    /// credentials, so a broken injected query looks like a wrong password.
    pub async fn execute(&self, email: &str, password: &str) -> Result<LoginMatch, ShopError> {
        match self.repo.find_by_credentials(email, password).await {
            Ok(Some(found)) => Ok(found),
            Ok(None) => Err(ShopError::InvalidCredentials),
            Err(e) => {
                tracing::warn!(error = %e, "login query failed");
                Err(ShopError::InvalidCredentials)
            }
        }
    }
}

// ── AuthStatus ───────────────────────────────────────────────────────────────

pub struct AuthStatusUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> AuthStatusUseCase<R> {
    /// Status never fails: a lookup error reads as anonymous.
    pub async fn execute(&self, claimed: Option<UserId>) -> Result<AuthStatus, ShopError> {
        let Some(user_id) = claimed else {
            return Ok(AuthStatus::Anonymous);
        };
        Ok(match self.repo.find_by_id(user_id).await {
            Ok(Some(user)) => AuthStatus::Authenticated(user),
            Ok(None) => AuthStatus::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "auth status lookup failed");
                AuthStatus::Anonymous
            }
        })
    }
}

// ── Profile ──────────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, ShopError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ShopError::UserNotFound)
    }
}
