use lambda_http::http::StatusCode;
use lambda_http::{Error, Request, RequestExt, Response};
use serde::Serialize;

use crate::common::errors::Error as HandlerError;
use crate::common::store::AwardKey;
use crate::common::{AWARD_BODY_PARAM, MOVIE_ID_PARAM};

pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(body)?)
        .map_err(Box::new)?;

    Ok(response)
}

/// Reads the award key from the `movieId` and `awardBody` path parameters.
/// `movieId` must be a base-10 integer and `awardBody` non-empty.
pub fn extract_award_key(request: &Request) -> Result<AwardKey, HandlerError> {
    let params = request.path_parameters();

    let movie_id = params
        .first(MOVIE_ID_PARAM)
        .and_then(|val| val.parse::<i64>().ok())
        .ok_or(HandlerError::MissingKey)?;

    let award_body = match params.first(AWARD_BODY_PARAM) {
        Some(val) if !val.is_empty() => val.to_string(),
        _ => return Err(HandlerError::MissingKey),
    };

    Ok(AwardKey {
        movie_id,
        award_body,
    })
}
