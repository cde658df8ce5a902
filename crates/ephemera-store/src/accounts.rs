use ephemera_types::models::{Profile, User, profile_pic_for};
use tracing::{info, warn};

use crate::Store;
use crate::error::{Result, StoreError};

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

impl Store {
    // -- Account directory --

    /// Validate and store a new user. Username and email are trimmed, the
    /// password is taken as given. The first failing rule is reported and
    /// nothing is stored.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<Profile> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(StoreError::MissingFields);
        }
        if username.chars().count() < MIN_USERNAME_CHARS {
            return Err(StoreError::UsernameTooShort);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(StoreError::PasswordTooShort);
        }

        let created_at = self.now();
        let profile = self.with_state(|state| {
            if state.users.contains_key(username) {
                return Err(StoreError::UsernameTaken);
            }
            if state.users.values().any(|u| u.email == email) {
                return Err(StoreError::EmailTaken);
            }

            let user = User {
                username: username.to_string(),
                password: password.to_string(),
                email: email.to_string(),
                created_at,
                profile_pic: Some(profile_pic_for(username)),
            };
            let profile = Profile::from(&user);
            state.users.insert(user.username.clone(), user);
            Ok(profile)
        })?;

        info!("Registered user {}", profile.username);
        Ok(profile)
    }

    /// Check credentials by exact string comparison.
    pub fn login(&self, username: &str, password: &str) -> Result<Profile> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::MissingCredentials);
        }

        self.with_state(|state| match state.users.get(username) {
            Some(user) if user.password == password => Ok(Profile::from(user)),
            _ => {
                warn!("Failed login for {}", username);
                Err(StoreError::InvalidCredentials)
            }
        })
    }

    /// Profile for `username`, or an empty one if the directory has no entry.
    pub fn profile(&self, username: &str) -> Profile {
        self.with_state(|state| {
            state
                .users
                .get(username)
                .map(Profile::from)
                .unwrap_or_else(|| Profile::unknown(username))
        })
    }

    pub fn user_count(&self) -> usize {
        self.with_state(|state| state.users.len())
    }
}
