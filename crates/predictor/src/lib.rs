//! HTTP client for the startup profit prediction endpoint.
//!
//! This crate provides:
//! - PredictionClient: posts spending figures and reads back a profit estimate
//! - PredictorConfig: where the endpoint lives
//!
//! A failed call never surfaces as an error from [`PredictionClient::predict`];
//! it becomes [`ProfitEstimate::Unavailable`] and is logged.

use core_types::{EstimateFailure, PredictionInput, ProfitEstimate};
use thiserror::Error;
use tracing::{debug, error, warn};
use web_types::{HealthResponse, PROFIT_FIELD, PredictRequest};

/// Errors from prediction calls.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Response has no numeric `predicted_profit` field")]
    MissingProfit,
}

impl PredictError {
    /// Collapse into the failure recorded on an estimate.
    pub fn to_failure(&self) -> EstimateFailure {
        match self {
            PredictError::Http(e) => EstimateFailure::Transport(e.to_string()),
            PredictError::Status(status) => EstimateFailure::Status(status.as_u16()),
            PredictError::MissingProfit => EstimateFailure::MissingProfit,
        }
    }
}

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Base URL (default: http://127.0.0.1:8000)
    pub base_url: String,
    /// Path of the predict route (default: /predict)
    pub predict_path: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            predict_path: "/predict".to_string(),
        }
    }
}

impl PredictorConfig {
    /// Config targeting `base_url` with the default predict path.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.predict_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.trim_end_matches('/'))
    }
}

/// Client for the prediction endpoint.
pub struct PredictionClient {
    config: PredictorConfig,
    client: reqwest::Client,
}

impl PredictionClient {
    /// Create a new PredictionClient with the given config.
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Estimate profit for `input`. Single attempt, never fails.
    pub async fn predict(&self, input: &PredictionInput) -> ProfitEstimate {
        match self.try_predict(input).await {
            Ok(profit) => {
                debug!(profit, state = %input.state, "prediction computed");
                ProfitEstimate::computed(profit)
            }
            Err(e) => {
                match &e {
                    PredictError::Http(_) => {
                        error!(
                            url = %self.config.predict_url(),
                            error = %e,
                            "could not reach prediction endpoint, falling back to 0"
                        );
                    }
                    PredictError::Status(_) | PredictError::MissingProfit => {
                        warn!(error = %e, "prediction unavailable, falling back to 0");
                    }
                }
                ProfitEstimate::unavailable(e.to_failure())
            }
        }
    }

    /// Estimated profit as a plain number, 0 on any failure.
    pub async fn predict_profit(&self, input: &PredictionInput) -> f64 {
        self.predict(input).await.value_or_zero()
    }

    /// Post `input` and read the profit, surfacing every failure.
    pub async fn try_predict(&self, input: &PredictionInput) -> Result<f64> {
        let response = self
            .client
            .post(self.config.predict_url())
            .json(&PredictRequest::from(input))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        let body = response.json::<serde_json::Value>().await?;
        extract_profit(&body).ok_or(PredictError::MissingProfit)
    }

    /// Check that the service is up.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.config.health_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        Ok(response.json::<HealthResponse>().await?)
    }
}

/// Read the profit field from a response body of any shape.
fn extract_profit(body: &serde_json::Value) -> Option<f64> {
    body.get(PROFIT_FIELD).and_then(serde_json::Value::as_f64)
}
