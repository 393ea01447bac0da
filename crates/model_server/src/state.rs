//! Application state for the model service.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::model::LinearModel;

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    /// Loaded model, absent when loading failed.
    pub model: Option<Arc<LinearModel>>,
}

impl AppState {
    /// Create app state serving the given model.
    pub fn new(model: LinearModel) -> Self {
        Self {
            model: Some(Arc::new(model)),
        }
    }

    /// Load the model at `path`. A failed load is logged and the service
    /// keeps running without a model.
    pub fn load(path: &Path) -> Self {
        info!(path = %path.display(), "loading model");
        match LinearModel::load(path) {
            Ok(model) => {
                info!("model loaded");
                Self::new(model)
            }
            Err(e) => {
                error!(error = %e, "failed to load model, predictions will return 0");
                Self::default()
            }
        }
    }

    pub fn model(&self) -> Option<&LinearModel> {
        self.model.as_deref()
    }
}
