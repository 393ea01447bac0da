//! Linear startup profit model.
//!
//! State is one-hot encoded with New York as the dropped baseline column,
//! so only California and Florida carry an offset.

use std::fs;
use std::path::{Path, PathBuf};

use core_types::{PredictionInput, UsState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a model file.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid model file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Profit offsets relative to New York.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateOffsets {
    pub california: f64,
    pub florida: f64,
}

/// Fitted linear regression over the spending figures and state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub rd_spend: f64,
    pub administration: f64,
    pub marketing_spend: f64,
    pub state_offsets: StateOffsets,
}

impl LinearModel {
    /// Load a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn predict(&self, input: &PredictionInput) -> f64 {
        self.intercept
            + self.rd_spend * input.rd_spend
            + self.administration * input.administration
            + self.marketing_spend * input.marketing_spend
            + self.state_offset(input.state)
    }

    /// One-hot column for the state's model code. Code 0 is the baseline.
    fn state_offset(&self, state: UsState) -> f64 {
        let columns = [0.0, self.state_offsets.california, self.state_offsets.florida];
        columns[usize::from(state.code())]
    }
}

#[cfg(test)]
pub(crate) fn test_model() -> LinearModel {
    LinearModel {
        intercept: 100.0,
        rd_spend: 2.0,
        administration: 0.5,
        marketing_spend: 0.25,
        state_offsets: StateOffsets {
            california: 10.0,
            florida: -20.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input(state: UsState) -> PredictionInput {
        PredictionInput {
            rd_spend: 1000.0,
            administration: 500.0,
            marketing_spend: 200.0,
            state,
        }
    }

    #[test]
    fn test_predict_new_york_baseline() {
        // 100 + 2000 + 250 + 50
        assert_eq!(test_model().predict(&input(UsState::NewYork)), 2400.0);
    }

    #[test]
    fn test_predict_state_offsets() {
        let model = test_model();
        assert_eq!(model.predict(&input(UsState::California)), 2410.0);
        assert_eq!(model.predict(&input(UsState::Florida)), 2380.0);
    }

    #[test]
    fn test_load_model_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "intercept": 100.0,
                "rd_spend": 2.0,
                "administration": 0.5,
                "marketing_spend": 0.25,
                "state_offsets": {{"california": 10.0, "florida": -20.0}}
            }}"#
        )
        .unwrap();

        let model = LinearModel::load(file.path()).unwrap();
        assert_eq!(model, test_model());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = LinearModel::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"intercept": 1.0}}"#).unwrap();

        let err = LinearModel::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn test_bundled_model_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../model/startup_model.json");
        let model = LinearModel::load(&path).unwrap();
        assert!(model.rd_spend > 0.0);
    }
}
