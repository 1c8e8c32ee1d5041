use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("INVALID_JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("MISSING_CONTRACT")]
    MissingContract,
    #[error("TARGET_NOT_FOUND")]
    TargetNotFound,
}
