use tower_sessions::session::Error;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer, cookie::SameSite};

/// Key under which the signed-in username is kept in the session.
const USERNAME_KEY: &str = "username";

/// Identity resolved from the session, inserted into request extensions by
/// [`require_session`](crate::middleware::require_session).
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

/// Server-side sessions in memory, identified by an HTTP-only cookie.
pub fn session_layer(cookie_name: &str) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(cookie_name.to_string())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_secure(false)
}

/// Bind the session to `username`, issuing a fresh session id.
pub async fn start(session: &Session, username: &str) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(USERNAME_KEY, username).await
}

pub async fn end(session: &Session) -> Result<(), Error> {
    session.flush().await
}

pub async fn username(session: &Session) -> Result<Option<String>, Error> {
    session.get::<String>(USERNAME_KEY).await
}
