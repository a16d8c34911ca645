use axum::extract::rejection::FormRejection;
use axum::{Form, Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use shoplab_session::cookie::{clear_session_cookie, set_session_cookie};
use shoplab_session::identity::{SessionUser, session_user_id};

use crate::domain::types::AuthStatus;
use crate::error::ShopError;
use crate::handlers::form_or_default;
use crate::state::AppState;
use crate::usecase::auth::{AuthStatusUseCase, GetProfileUseCase, LoginUseCase, RegisterUseCase};

#[derive(Deserialize, Default)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ── POST /register ───────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<&'static str, ShopError> {
    let form = form_or_default(form);
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(&form.email, &form.password).await?;
    Ok("registered")
}

// ── POST /login ──────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<(CookieJar, &'static str), ShopError> {
    let form = form_or_default(form);
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let found = usecase.execute(&form.email, &form.password).await?;
    tracing::info!(user_id = %found.id, is_admin = found.is_admin, "login succeeded");
    Ok((set_session_cookie(jar, found.id), "ok"))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(jar: CookieJar) -> (CookieJar, &'static str) {
    (clear_session_cookie(jar), "logged out")
}

// ── GET /auth/status ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(untagged)]
pub enum AuthStatusResponse {
    Anonymous {
        authenticated: bool,
        user_id: Option<i32>,
        is_admin: bool,
    },
    Authenticated {
        authenticated: bool,
        user_id: i32,
        email: String,
        is_admin: bool,
    },
}

impl From<AuthStatus> for AuthStatusResponse {
    fn from(status: AuthStatus) -> Self {
        match status {
            AuthStatus::Anonymous => Self::Anonymous {
                authenticated: false,
                user_id: None,
                is_admin: false,
            },
            AuthStatus::Authenticated(user) => Self::Authenticated {
                authenticated: true,
                user_id: user.id.0,
                email: user.email,
                is_admin: user.is_admin,
            },
        }
    }
}

pub async fn auth_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<AuthStatusResponse>, ShopError> {
    let usecase = AuthStatusUseCase {
        repo: state.user_repo(),
    };
    let status = usecase.execute(session_user_id(&jar)).await?;
    Ok(Json(status.into()))
}

// ── GET /profile ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub email: String,
    pub is_admin: bool,
}

pub async fn profile(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ShopError> {
    let usecase = GetProfileUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(session.user_id).await?;
    Ok(Json(ProfileResponse {
        id: user.id.0,
        email: user.email,
        is_admin: user.is_admin,
    }))
}
