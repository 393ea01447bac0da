//! Raw prediction form fields and their parsing.

use core_types::{PredictionInput, UnknownState, UsState};
use thiserror::Error;

/// Errors from parsing a prediction form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("State is required")]
    MissingState,

    #[error(transparent)]
    UnknownState(#[from] UnknownState),
}

/// Text of the four form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionForm {
    pub rd_spend: String,
    pub administration: String,
    pub marketing_spend: String,
    pub state: String,
}

impl PredictionForm {
    /// Options offered by the state selector.
    pub fn state_options() -> [&'static str; 3] {
        UsState::ALL.map(UsState::label)
    }

    /// Submission stays disabled until a state is picked.
    pub fn can_submit(&self) -> bool {
        !self.state.is_empty()
    }

    pub fn parse(&self) -> Result<PredictionInput, FormError> {
        let rd_spend = parse_amount("R&D Spend", &self.rd_spend)?;
        let administration = parse_amount("Administration", &self.administration)?;
        let marketing_spend = parse_amount("Marketing Spend", &self.marketing_spend)?;

        if self.state.is_empty() {
            return Err(FormError::MissingState);
        }
        let state = self.state.parse::<UsState>()?;

        Ok(PredictionInput {
            rd_spend,
            administration,
            marketing_spend,
            state,
        })
    }
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField { field });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}
