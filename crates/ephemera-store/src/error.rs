use thiserror::Error;

use crate::accounts::{MIN_PASSWORD_CHARS, MIN_USERNAME_CHARS};

/// Failure category, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    NotFound,
    Conflict,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("all fields are required")]
    MissingFields,

    #[error("username and password are required")]
    MissingCredentials,

    #[error("username must be at least {} characters", MIN_USERNAME_CHARS)]
    UsernameTooShort,

    #[error("password must be at least {} characters", MIN_PASSWORD_CHARS)]
    PasswordTooShort,

    #[error("username already exists")]
    UsernameTaken,

    #[error("email is already registered")]
    EmailTaken,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("post {0} not found")]
    PostNotFound(u64),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields
            | Self::MissingCredentials
            | Self::UsernameTooShort
            | Self::PasswordTooShort => ErrorKind::Validation,
            Self::UsernameTaken | Self::EmailTaken => ErrorKind::Conflict,
            Self::InvalidCredentials => ErrorKind::Auth,
            Self::PostNotFound(_) => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
