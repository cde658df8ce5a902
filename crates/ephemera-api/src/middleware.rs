use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::error::ApiError;
use crate::session::{self, CurrentUser};

/// Resolve the session and attach the [`CurrentUser`] to the request.
pub async fn require_session(
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = session::username(&session)
        .await?
        .ok_or(ApiError::AuthRequired)?;

    req.extensions_mut().insert(CurrentUser { username });
    Ok(next.run(req).await)
}
