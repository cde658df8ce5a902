use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;
use tracing::info;

use ephemera_store::Store;
use ephemera_types::api::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

use crate::error::ApiError;
use crate::session::{self, CurrentUser};

pub const DEFAULT_SESSION_COOKIE: &str = "ephemera_session";

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub cookie_name: String,
    pub static_dir: PathBuf,
}

impl AppStateInner {
    pub fn new(
        store: Store,
        cookie_name: impl Into<String>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
            static_dir: static_dir.into(),
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .store
        .register(&req.username, &req.email, &req.password)?;

    session::start(&session, &profile.username).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            username: profile.username,
            message: "user registered".into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state.store.login(&req.username, &req.password)?;
    session::start(&session, &profile.username).await?;
    info!("{} logged in", profile.username);

    Ok(Json(AuthResponse {
        success: true,
        username: profile.username,
        message: "logged in".into(),
    }))
}

/// Always succeeds, with or without a session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, ApiError> {
    session::end(&session).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "logged out".into(),
    }))
}

pub async fn current_user(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> impl IntoResponse {
    Json(state.store.profile(&user.username))
}
