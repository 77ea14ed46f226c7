use serde::Deserialize;
use thiserror::Error;

use crate::IdError;

pub type ModelResult<T> = Result<T, ModelError>;

/// Matches errors that are returned from the LinkedIn API as part of the JSON
/// response object.
///
/// See the LinkedIn error handling guide for the meaning of
/// `serviceErrorCode`.
#[derive(Debug, Error, Deserialize, Clone, PartialEq, Eq)]
#[error("status {status:?} ({code:?}): {message}")]
pub struct ApiErrorBody {
    pub status: Option<u16>,
    #[serde(rename = "serviceErrorCode")]
    pub service_error_code: Option<i64>,
    pub code: Option<String>,
    pub message: String,
}

/// Groups up the kinds of errors that may happen in this crate.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("json parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("input/output error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("id error: {0}")]
    Id(#[from] IdError),
}
