use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use ephemera_types::api::{CommentRequest, CreatePostRequest, ReactRequest};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::session::CurrentUser;

pub async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.active_posts())
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> impl IntoResponse {
    let post = state.store.create_post(&user.username, &req.content);
    (StatusCode::CREATED, Json(post))
}

pub async fn react(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<ReactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.store.react(post_id, &user.username, &req.emoji)?;
    Ok(Json(post))
}

pub async fn comment(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .store
        .comment(post_id, &user.username, &req.content)?;
    Ok(Json(post))
}

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.stats())
}
