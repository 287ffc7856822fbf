#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing data")]
    MissingData,

    #[error("{entity} for {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
