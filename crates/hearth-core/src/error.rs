use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common service and storage failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Plan not found: {0}")]
    PlanNotFound(Uuid),
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),
    #[error("Person not found: {0}")]
    PersonNotFound(String),
    #[error("Household not found: {0}")]
    HouseholdNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
