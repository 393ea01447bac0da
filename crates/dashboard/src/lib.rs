//! Dashboard state for the profit-forecast app.
//!
//! This crate provides:
//! - SessionHolder: mock login/signup gating the dashboard
//! - PredictionForm: parsing of the four raw form fields
//! - Dashboard: owns the session, the prediction client, and the history

mod form;
mod session;

pub use form::{FormError, PredictionForm};
pub use session::{SessionConfig, SessionError, SessionHolder};

use core_types::{History, PredictionInput, PredictionResult, User};
use predictor::{PredictionClient, PredictorConfig};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from dashboard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Invalid form: {0}")]
    Form(#[from] FormError),
}

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Configuration for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub predictor: PredictorConfig,
    pub session: SessionConfig,
}

/// Top-level application state.
pub struct Dashboard {
    session: SessionHolder,
    client: PredictionClient,
    history: History,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            session: SessionHolder::new(config.session),
            client: PredictionClient::new(config.predictor),
            history: History::new(),
        }
    }

    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        Ok(self.session.login(email, password).await?)
    }

    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<&User> {
        Ok(self.session.signup(name, email, password).await?)
    }

    /// Sign out and discard the page's results.
    pub fn logout(&mut self) {
        self.session.logout();
        self.history.clear();
    }

    /// Request an estimate for `input` and record it.
    ///
    /// Fails only when nobody is signed in. An unreachable or failing
    /// endpoint still produces a result, with an unavailable estimate.
    pub async fn submit(&mut self, input: PredictionInput) -> Result<&PredictionResult> {
        let user = self.session.require_user()?;
        debug!(user = %user.email, state = %input.state, "submitting prediction");

        let estimate = self.client.predict(&input).await;
        let result = PredictionResult::new(input, estimate);
        info!(
            id = %result.id,
            profit = result.profit(),
            computed = result.estimate.is_computed(),
            "prediction recorded"
        );

        Ok(self.history.push(result))
    }

    /// Parse `form` and submit it.
    pub async fn submit_form(&mut self, form: &PredictionForm) -> Result<&PredictionResult> {
        let input = form.parse()?;
        self.submit(input).await
    }

    pub fn latest(&self) -> Option<&PredictionResult> {
        self.history.latest()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
