use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, bail};

use crate::domain::types::LoginQueryMode;

/// Shop service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL` (required).
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `SHOP_PORT`.
    pub shop_port: u16,
    /// Directory served under `/app/`. Env var: `STATIC_DIR`.
    pub static_dir: PathBuf,
    /// Directory holding `<id>.jpg` / `<id>.png` for `/local-image`. Env var: `IMAGES_DIR`.
    pub images_dir: PathBuf,
    /// Secret printed on the admin panel. Env var: `ADMIN_SECRET`.
    pub admin_secret: String,
    /// Env var: `INSECURE_LOGIN_QUERY` (default `true` → injectable login).
    pub login_query: LoginQueryMode,
    /// Per-fetch timeout for the relay; unset means wait forever.
    /// Env var: `RELAY_TIMEOUT_SECS`.
    pub relay_timeout: Option<Duration>,
}

impl ShopConfig {
    /// Load from the process environment.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is missing or any set variable is malformed.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok()).expect("invalid shop configuration")
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shop_port = match var("SHOP_PORT") {
            Some(v) => v.parse().context("SHOP_PORT")?,
            None => 8080,
        };
        let login_query = match var("INSECURE_LOGIN_QUERY").as_deref() {
            None | Some("1" | "true" | "yes") => LoginQueryMode::Interpolated,
            Some("0" | "false" | "no") => LoginQueryMode::Parameterized,
            Some(other) => bail!("INSECURE_LOGIN_QUERY: expected true/false, got {other:?}"),
        };
        let relay_timeout = var("RELAY_TIMEOUT_SECS")
            .map(|v| v.parse().map(Duration::from_secs))
            .transpose()
            .context("RELAY_TIMEOUT_SECS")?;

        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL not set")?,
            shop_port,
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| "static".to_owned())
                .into(),
            images_dir: var("IMAGES_DIR")
                .unwrap_or_else(|| "static/images".to_owned())
                .into(),
            admin_secret: var("ADMIN_SECRET").unwrap_or_else(|| "TOP-SECRET".to_owned()),
            login_query,
            relay_timeout,
        })
    }
}
