//! Prediction API route.

use axum::{Json, extract::State};
use core_types::{PredictionInput, UsState};
use tracing::{debug, warn};
use web_types::{PredictRequest, PredictResponse};

use crate::state::AppState;

/// POST /predict - Estimate profit for the submitted figures.
///
/// Failures still answer 200 with a zero profit and an error confidence.
pub async fn predict_profit(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let Some(model) = state.model() else {
        warn!("prediction requested but no model is loaded");
        return Json(PredictResponse::error("models not loaded"));
    };

    let Ok(us_state) = req.state.parse::<UsState>() else {
        warn!(state = %req.state, "prediction requested for unknown state");
        return Json(PredictResponse::error(format!(
            "invalid state. Choose from: {}",
            state_choices()
        )));
    };

    let input = PredictionInput {
        rd_spend: req.rd_spend,
        administration: req.administration,
        marketing_spend: req.marketing_spend,
        state: us_state,
    };
    let profit = model.predict(&input);
    if !profit.is_finite() {
        warn!(profit, state = %us_state, "prediction out of range");
        return Json(PredictResponse::error("prediction out of range"));
    }
    debug!(profit, state = %us_state, "prediction served");

    Json(PredictResponse::high(profit))
}

/// Supported labels formatted as `[New York, California, Florida]`.
fn state_choices() -> String {
    let labels: Vec<&str> = UsState::ALL.iter().map(|s| s.label()).collect();
    format!("[{}]", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_model;

    fn request(state: &str) -> PredictRequest {
        PredictRequest {
            rd_spend: 1000.0,
            administration: 500.0,
            marketing_spend: 200.0,
            state: state.to_string(),
        }
    }

    #[test]
    fn test_state_choices() {
        assert_eq!(state_choices(), "[New York, California, Florida]");
    }

    #[tokio::test]
    async fn test_predict_valid_state() {
        let state = AppState::new(test_model());

        let Json(response) = predict_profit(State(state), Json(request("California"))).await;

        assert_eq!(response.predicted_profit, 2410.0);
        assert_eq!(response.confidence.as_deref(), Some("high"));
    }

    #[tokio::test]
    async fn test_predict_invalid_state() {
        let state = AppState::new(test_model());

        let Json(response) = predict_profit(State(state), Json(request("Texas"))).await;

        assert_eq!(response.predicted_profit, 0.0);
        assert_eq!(
            response.confidence.as_deref(),
            Some("error: invalid state. Choose from: [New York, California, Florida]")
        );
    }

    #[tokio::test]
    async fn test_predict_without_model() {
        let state = AppState::default();

        let Json(response) = predict_profit(State(state), Json(request("Florida"))).await;

        assert_eq!(response.predicted_profit, 0.0);
        assert_eq!(
            response.confidence.as_deref(),
            Some("error: models not loaded")
        );
    }

    #[tokio::test]
    async fn test_predict_overflow_is_error() {
        let state = AppState::new(test_model());
        let mut req = request("New York");
        req.rd_spend = f64::MAX;

        let Json(response) = predict_profit(State(state), Json(req)).await;

        assert_eq!(response.predicted_profit, 0.0);
        assert_eq!(
            response.confidence.as_deref(),
            Some("error: prediction out of range")
        );
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["predicted_profit"], 0.0);
    }

    #[tokio::test]
    async fn test_missing_model_checked_before_state() {
        let state = AppState::default();

        let Json(response) = predict_profit(State(state), Json(request("Texas"))).await;

        assert_eq!(
            response.confidence.as_deref(),
            Some("error: models not loaded")
        );
    }
}
