//! Form submission hook
//!
//! The screen never authenticates anyone itself. A submitted form is handed to
//! an `AuthHandler`; the default one only writes a diagnostic log line.

use std::fmt;

/// Which tab the form was submitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthAction {
    #[default]
    Login,
    Register,
}

impl AuthAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Register => "register",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &format_args!("<{} chars>", self.password.chars().count()))
            .finish()
    }
}

/// Receives submitted credentials. Swap in a real implementation to wire the
/// form to an authentication service.
pub trait AuthHandler: Send {
    fn submit(&mut self, action: AuthAction, credentials: &Credentials);
}

/// Logs the submission and does nothing else.
#[derive(Debug, Default)]
pub struct LoggingAuthHandler;

impl AuthHandler for LoggingAuthHandler {
    fn submit(&mut self, action: AuthAction, credentials: &Credentials) {
        tracing::info!(
            action = action.as_str(),
            email = %credentials.email,
            password_len = credentials.password.chars().count(),
            "{} submitted",
            action
        );
    }
}

/// Third-party identity provider buttons. They are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProvider {
    GitHub,
    Google,
}

impl IdentityProvider {
    pub fn label(&self) -> &'static str {
        match self {
            IdentityProvider::GitHub => "GitHub",
            IdentityProvider::Google => "Google",
        }
    }
}
