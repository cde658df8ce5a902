use axum::{
    extract::{Request, State},
    response::{IntoResponse, Redirect, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tower_sessions::Session;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::session;

/// `/` serves the feed page to signed-in clients and sends everyone else
/// to the login page.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    req: Request,
) -> Result<Response, ApiError> {
    if session::username(&session).await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }
    Ok(serve_page(&state, "index.html", req).await)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    req: Request,
) -> Result<Response, ApiError> {
    if session::username(&session).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(serve_page(&state, "login.html", req).await)
}

async fn serve_page(state: &AppState, name: &str, req: Request) -> Response {
    let file = ServeFile::new(state.static_dir.join(name));
    match file.oneshot(req).await {
        Ok(res) => res.into_response(),
        // Missing files come back as a 404 response, never as an error.
        Err(never) => match never {},
    }
}
