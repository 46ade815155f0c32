use competition_fees::FeeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeServiceError {
    #[error("Competition not found: {competition_id}. Cannot retrieve registration fee.")]
    CompetitionNotFound { competition_id: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Fee(#[from] FeeError),
}

impl FeeServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeeServiceError::CompetitionNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FeeServiceError>;
