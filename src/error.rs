use serde_json::{json, Value};

pub const INVALID_INPUT_ALERT: &str = "Inputs have to be positive numbers!";
pub const POSITION_ALERT: &str = "Could not get your position!";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown workout type: {0:?}")]
    UnknownKind(String),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be a positive number")]
    NonPositive { field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Geolocation is not available")]
    Unavailable,
    #[error("Geolocation permission denied")]
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("Map adapter failed: {0}")]
    Map(String),
    #[error("Workout list failed: {0}")]
    List(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl AppError {
    /// Text shown to the user in an alert, if this error is surfaced at all.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::Validation(_) => Some(INVALID_INPUT_ALERT),
            AppError::Geolocation(_) => Some(POSITION_ALERT),
            AppError::Adapter(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": self.to_string(),
            "alert": self.user_message(),
        })
    }
}
