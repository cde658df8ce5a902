use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use ephemera_store::{ErrorKind, StoreError};
use ephemera_types::api::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not authenticated")]
    AuthRequired,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("session unavailable")]
    Session(#[from] tower_sessions::session::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::Store(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                // Registration answers duplicates with 400 on the wire.
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::Auth => StatusCode::UNAUTHORIZED,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
            },
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Session(e) => error!("Session store error: {}", e),
            _ => debug!("Request rejected with {}: {}", status, self),
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
