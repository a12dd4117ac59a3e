use lambda_http::{http::StatusCode, Error as LambdaError, Response};
use serde_json::json;
use thiserror::Error;

use crate::common::store::StoreError;
use crate::common::utils::json_response;
use crate::common::MISSING_KEY_ERROR;

#[derive(Debug, Error)]
pub enum Error {
    /// Path parameters absent, empty or unparseable. Answered with 404.
    #[error("{}", MISSING_KEY_ERROR)]
    MissingKey,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    LambdaError(LambdaError),
}

impl From<LambdaError> for Error {
    fn from(err: LambdaError) -> Self {
        Self::LambdaError(err)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Store(err) => err.code(),
            _ => None,
        }
    }

    /// Renders the error as the response the caller sees. Only failures to
    /// build a response at all are handed back to the runtime.
    pub fn into_response(self) -> Result<Response<String>, LambdaError> {
        match self {
            Error::MissingKey => {
                json_response(StatusCode::NOT_FOUND, &json!({ "Message": MISSING_KEY_ERROR }))
            }
            Error::Store(err) => json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": err.message() }),
            ),
            Error::LambdaError(err) => Err(err),
        }
    }
}
