use thiserror::Error;

/// A result string that is not of the form `<wins>-<losses>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected a result like \"3-2\", got {0:?}")]
    Shape(String),
    #[error("{token:?} in result {input:?} is not a non-negative integer")]
    Count { input: String, token: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a whole number (got {value})")]
    NotInteger { field: &'static str, value: f64 },
    #[error("{field} must be at most {max} (got {value})")]
    TooLarge { field: &'static str, value: f64, max: u32 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error(
        "deck {deck_id} is used in {tournaments} tournament(s); remove the tournaments first"
    )]
    DeckInUse { deck_id: i64, tournaments: i64 },
    #[error("user {user_id} is already in a team")]
    AlreadyInTeam { user_id: i64 },
    #[error("user {user_id} is not in a team")]
    NotInTeam { user_id: i64 },
}

impl TrackerError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        TrackerError::NotFound { entity, id }
    }
}

/// Attach a lookup failure to an optional row.
pub fn require<T>(row: Option<T>, entity: &'static str, id: i64) -> Result<T, TrackerError> {
    row.ok_or_else(|| TrackerError::not_found(entity, id))
}
