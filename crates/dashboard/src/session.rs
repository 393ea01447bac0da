//! Mock session holder.
//!
//! Login and signup accept any non-empty credentials after a fixed delay.
//! Nothing is verified or persisted; the current user lives only as long
//! as the holder.

use std::time::Duration;

use core_types::User;
use thiserror::Error;
use tracing::info;

/// Errors from session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Missing credential field: {0}")]
    MissingCredentials(&'static str),

    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Configuration for the session holder.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Artificial delay before login/signup completes (default: 800ms)
    pub delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

/// Holds the optional current user.
#[derive(Debug, Default)]
pub struct SessionHolder {
    config: SessionConfig,
    user: Option<User>,
}

impl SessionHolder {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, user: None }
    }

    /// Sign in as the owner of `email`. The password is never checked.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        require_field("email", email)?;
        require_field("password", password)?;

        tokio::time::sleep(self.config.delay).await;

        let user = User::from_email(email);
        info!(email = %user.email, "user logged in");
        Ok(&*self.user.insert(user))
    }

    /// Register and sign in with the given name and email.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<&User> {
        require_field("name", name)?;
        require_field("email", email)?;
        require_field("password", password)?;

        tokio::time::sleep(self.config.delay).await;

        let user = User::new(name, email);
        info!(email = %user.email, "user signed up");
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "user logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Gate for protected views.
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(SessionError::NotAuthenticated)
    }
}

fn require_field(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SessionError::MissingCredentials(name));
    }
    Ok(())
}
