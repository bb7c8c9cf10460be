use thiserror::Error;

/// Validation failures raised at the plan's mutation boundary.
///
/// Every variant is locally recoverable: the offending mutation is rejected
/// and the plan keeps its previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid value for {field}: {value}")]
    InvalidArgument { field: String, value: String },
    #[error("no entity with id {id}")]
    NotFound { id: u64 },
    #[error("index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
    #[error("division undefined: {0}")]
    DivisionUndefined(String),
}

impl PlanError {
    pub fn invalid_argument(field: &str, value: impl ToString) -> Self {
        PlanError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Converts a signed input into a non-negative count, rejecting negatives.
pub fn non_negative(field: &str, value: i64) -> Result<u32, PlanError> {
    u32::try_from(value).map_err(|_| PlanError::invalid_argument(field, value))
}
