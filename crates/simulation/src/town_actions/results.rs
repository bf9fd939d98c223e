use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// The action was valid but left the town as it was (same-type paint,
    /// empty undo history, clear already running, unchanged size).
    NoChange,
    Error(ActionError),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ActionResult::Error(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionError {
    /// The paint centre lies outside the grid.
    OutOfBounds,
    InvalidParameter(String),
}
