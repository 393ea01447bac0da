//! Core types for the profit-forecast dashboard.
//!
//! This crate defines the shared data structures used by the
//! prediction client, the dashboard state, and the model service.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of results kept in a [`History`].
pub const HISTORY_CAPACITY: usize = 10;

/// Error returned when a state label is not one of [`UsState::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown state: {0}")]
pub struct UnknownState(pub String);

/// US state a startup operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsState {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "California")]
    California,
    #[serde(rename = "Florida")]
    Florida,
}

impl UsState {
    /// All supported states, in model code order.
    pub const ALL: [UsState; 3] = [UsState::NewYork, UsState::California, UsState::Florida];

    /// Display label, also used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            UsState::NewYork => "New York",
            UsState::California => "California",
            UsState::Florida => "Florida",
        }
    }

    /// Numeric code the model was trained with.
    pub fn code(self) -> u8 {
        match self {
            UsState::NewYork => 0,
            UsState::California => 1,
            UsState::Florida => 2,
        }
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UsState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::ALL
            .into_iter()
            .find(|state| state.label() == s)
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

/// Business spending figures submitted for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// R&D spend
    pub rd_spend: f64,
    /// Administration spend
    pub administration: f64,
    /// Marketing spend
    pub marketing_spend: f64,
    /// Operating state
    pub state: UsState,
}

/// Why a profit estimate could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EstimateFailure {
    /// Endpoint answered with a non-success status code
    Status(u16),
    /// Endpoint unreachable or body unreadable
    Transport(String),
    /// Body had no numeric profit field
    MissingProfit,
}

impl fmt::Display for EstimateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateFailure::Status(code) => write!(f, "endpoint returned status {code}"),
            EstimateFailure::Transport(msg) => write!(f, "transport failure: {msg}"),
            EstimateFailure::MissingProfit => f.write_str("response had no profit field"),
        }
    }
}

/// Outcome of a prediction call.
///
/// Keeps a genuine zero profit apart from a failed call. Callers that
/// only want a number use [`ProfitEstimate::value_or_zero`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfitEstimate {
    Computed { profit: f64 },
    Unavailable { failure: EstimateFailure },
}

impl ProfitEstimate {
    pub fn computed(profit: f64) -> Self {
        ProfitEstimate::Computed { profit }
    }

    pub fn unavailable(failure: EstimateFailure) -> Self {
        ProfitEstimate::Unavailable { failure }
    }

    /// Estimated profit, or 0 when the call failed.
    pub fn value_or_zero(&self) -> f64 {
        match self {
            ProfitEstimate::Computed { profit } => *profit,
            ProfitEstimate::Unavailable { .. } => 0.0,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, ProfitEstimate::Computed { .. })
    }

    pub fn failure(&self) -> Option<&EstimateFailure> {
        match self {
            ProfitEstimate::Computed { .. } => None,
            ProfitEstimate::Unavailable { failure } => Some(failure),
        }
    }
}

/// A single submission and its estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Unique per submission
    pub id: Uuid,
    /// Figures that were submitted
    pub input: PredictionInput,
    /// Estimate returned for them
    pub estimate: ProfitEstimate,
    /// When the result was created
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    /// Create a result stamped with a fresh id and the current time.
    pub fn new(input: PredictionInput, estimate: ProfitEstimate) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            estimate,
            timestamp: Utc::now(),
        }
    }

    /// Profit as displayed, 0 for failed calls.
    pub fn profit(&self) -> f64 {
        self.estimate.value_or_zero()
    }
}

/// Recent results, newest first, capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<PredictionResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result at the front, dropping the oldest past capacity.
    pub fn push(&mut self, result: PredictionResult) -> &PredictionResult {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
        &self.entries[0]
    }

    /// Most recent result.
    pub fn latest(&self) -> Option<&PredictionResult> {
        self.entries.front()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &PredictionResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The signed-in dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build a user whose name is the local part of the email.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self::new(name, email)
    }
}
