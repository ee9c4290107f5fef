use thiserror::Error;

/// Errors produced by the Mealie gateway and its reqwest implementation.
#[derive(Error, Debug)]
pub enum MealieError {
    #[error("request to Mealie failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Mealie API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode Mealie response: {0}")]
    Decode(String),

    #[error("failed to serialize request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid Mealie base URL: {0}")]
    InvalidBaseUrl(String),
}
