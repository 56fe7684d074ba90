//! In-memory credential and authentication state for one client instance.
//!
//! # Design
//! `Session` holds the minimal identity data needed to decide which
//! authentication mode applies to a request. It performs no validation and
//! no network activity; logging in is the job of an external collaborator,
//! which flips `authenticated` through `mark_authenticated`. The flag only
//! ever transitions false → true — logout is outside this crate's scope.

/// Credential pair and authentication flag for one logical session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<String>,
    password: Option<String>,
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(user: &str, password: &str) -> Self {
        Self {
            user: Some(user.to_string()),
            password: Some(password.to_string()),
            authenticated: false,
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn set_user(&mut self, user: Option<String>) {
        self.user = user;
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    /// True iff a prior (external) login succeeded for the held user.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Record a successful external login. There is no inverse operation.
    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }
}
