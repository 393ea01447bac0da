//! Wire types for the profit prediction API.
//!
//! Shared by the prediction client and the model service so both sides
//! agree on field names.

use core_types::PredictionInput;
use serde::{Deserialize, Serialize};

/// Field holding the profit in a prediction response.
pub const PROFIT_FIELD: &str = "predicted_profit";

/// Body of `POST /predict`.
///
/// `state` stays a plain string so the service can answer unknown
/// labels with an error confidence instead of a 422.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub rd_spend: f64,
    pub administration: f64,
    pub marketing_spend: f64,
    pub state: String,
}

impl From<&PredictionInput> for PredictRequest {
    fn from(input: &PredictionInput) -> Self {
        Self {
            rd_spend: input.rd_spend,
            administration: input.administration,
            marketing_spend: input.marketing_spend,
            state: input.state.label().to_string(),
        }
    }
}

/// Body returned by `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

impl PredictResponse {
    pub fn high(predicted_profit: f64) -> Self {
        Self {
            predicted_profit,
            confidence: Some("high".to_string()),
        }
    }

    /// Zero profit carrying an error description.
    pub fn error(message: impl AsRef<str>) -> Self {
        Self {
            predicted_profit: 0.0,
            confidence: Some(format!("error: {}", message.as_ref())),
        }
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "API en ligne".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Route map advertised by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointMap {
    pub health: String,
    pub predict: String,
}

/// Body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

/// API error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::UsState;

    #[test]
    fn test_request_uses_snake_case_fields() {
        let input = PredictionInput {
            rd_spend: 1000.0,
            administration: 500.0,
            marketing_spend: 200.0,
            state: UsState::California,
        };

        let json = serde_json::to_value(PredictRequest::from(&input)).unwrap();
        assert_eq!(json["rd_spend"], 1000.0);
        assert_eq!(json["administration"], 500.0);
        assert_eq!(json["marketing_spend"], 200.0);
        assert_eq!(json["state"], "California");
    }

    #[test]
    fn test_response_without_confidence() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"predicted_profit": 42000}"#).unwrap();
        assert_eq!(response.predicted_profit, 42000.0);
        assert!(response.confidence.is_none());

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("confidence"));
    }

    #[test]
    fn test_error_response() {
        let response = PredictResponse::error("models not loaded");
        assert_eq!(response.predicted_profit, 0.0);
        assert_eq!(
            response.confidence.as_deref(),
            Some("error: models not loaded")
        );
    }

    #[test]
    fn test_profit_field_name_matches_response() {
        let json = serde_json::to_value(PredictResponse::high(1.5)).unwrap();
        assert_eq!(json[PROFIT_FIELD], 1.5);
        assert_eq!(json["confidence"], "high");
    }

    #[test]
    fn test_health_ok() {
        let health = HealthResponse::ok();
        assert!(health.is_ok());
        assert_eq!(health.message, "API en ligne");
    }

    #[test]
    fn test_api_error_with_code() {
        let err = ApiError::with_code("Route not found", "NOT_FOUND");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));

        let err = ApiError::new("boom");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("code"));
    }
}
