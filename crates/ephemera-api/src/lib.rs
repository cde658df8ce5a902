pub mod auth;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod posts;
pub mod session;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::auth::AppState;
use crate::middleware::require_session;

/// All routes, with the protected API behind the session middleware.
pub fn router(state: AppState) -> Router {
    let session_layer = session::session_layer(&state.cookie_name);

    let public_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/", get(pages::index))
        .route("/login", get(pages::login))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/current-user", get(auth::current_user))
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route("/api/posts/{post_id}/react", post(posts::react))
        .route("/api/posts/{post_id}/comment", post(posts::comment))
        .route("/api/stats", get(posts::get_stats))
        .layer(from_fn(require_session))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(session_layer)
}
