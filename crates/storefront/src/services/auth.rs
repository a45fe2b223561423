//! Mock authentication collaborator.
//!
//! Holds a seeded user directory and the current session. Login is a plain
//! directory lookup by email - no credential verification exists here at
//! all, which is exactly as much authentication security as a demo
//! storefront with fictional accounts needs.

use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

use zarurat_core::{Email, EmailError};

use crate::models::User;
use crate::seed::{self, SeedError};

const USERS_FILE: &str = "users.json";

/// Errors raised during a login attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No seeded account matches the address.
    #[error("no account registered for {0}")]
    UnknownEmail(Email),
}

/// The authentication service.
pub struct AuthService {
    directory: Vec<User>,
    session: Option<ActiveSession>,
}

/// An issued mock session.
#[derive(Debug, Clone)]
struct ActiveSession {
    token: Uuid,
    user: User,
}

impl AuthService {
    /// Auth service over the embedded user directory.
    #[must_use]
    pub fn builtin() -> Self {
        let raw = include_str!("../../data/users.json");
        let directory = serde_json::from_str(raw)
            .unwrap_or_else(|e| panic!("embedded user seed is malformed: {e}"));
        Self {
            directory,
            session: None,
        }
    }

    /// Auth service over a seed directory's `users.json`.
    ///
    /// Falls back to the embedded directory when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load(dir: &Path) -> Result<Self, SeedError> {
        match seed::load_json(&dir.join(USERS_FILE))? {
            Some(directory) => Ok(Self {
                directory,
                session: None,
            }),
            None => {
                tracing::warn!(
                    file = USERS_FILE,
                    dir = %dir.display(),
                    "user seed missing, using embedded directory"
                );
                Ok(Self::builtin())
            }
        }
    }

    /// Auth service over an explicit user list (test fixtures).
    #[must_use]
    pub const fn with_directory(directory: Vec<User>) -> Self {
        Self {
            directory,
            session: None,
        }
    }

    /// Start a session for the account registered under `email`.
    ///
    /// The lookup is case-insensitive. A successful login replaces any
    /// existing session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the address is malformed or unknown.
    pub fn login(&mut self, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let user = self
            .directory
            .iter()
            .find(|u| u.email.as_str().eq_ignore_ascii_case(email.as_str()))
            .cloned()
            .ok_or(AuthError::UnknownEmail(email))?;

        let token = Uuid::new_v4();
        tracing::info!(user = %user.email, %token, "session started");
        self.session = Some(ActiveSession {
            token,
            user: user.clone(),
        });

        Ok(user)
    }

    /// The seeded account directory (operator tooling and seed export).
    #[must_use]
    pub fn directory(&self) -> &[User] {
        &self.directory
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The current session token, if any.
    #[must_use]
    pub fn session_token(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.token)
    }

    /// End the current session. No-op when logged out.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(user = %session.user.email, "session ended");
        }
    }
}
