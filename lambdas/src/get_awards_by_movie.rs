use lambda_http::http::StatusCode;
use lambda_http::{
    run, service_fn, Error as LambdaError, Request as LambdaRequest, Response as LambdaResponse,
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

mod common;
use crate::common::config::Config;
use crate::common::errors::Error;
use crate::common::store::{AwardRecord, AwardStore, DynamoAwardStore};
use crate::common::utils::{extract_award_key, json_response};
use crate::common::NO_AWARDS_FOUND_ERROR;

#[derive(Debug, Serialize)]
struct Response {
    pub data: Vec<AwardRecord>,
}

async fn find_awards(
    request: &LambdaRequest,
    store: &dyn AwardStore,
) -> Result<LambdaResponse<String>, Error> {
    let key = extract_award_key(request)?;
    let data = store.find_awards(&key).await?;

    if data.is_empty() {
        info!("No awards for {:?}", key);
        return Ok(json_response(
            StatusCode::NOT_FOUND,
            &json!({ "Message": NO_AWARDS_FOUND_ERROR }),
        )?);
    }

    info!("Found {} awards for {:?}", data.len(), key);
    Ok(json_response(StatusCode::OK, &Response { data })?)
}

#[tracing::instrument(skip(store))]
async fn process_request(
    request: LambdaRequest,
    store: &dyn AwardStore,
) -> Result<LambdaResponse<String>, LambdaError> {
    info!("Event: {:?}", request);

    match find_awards(&request, store).await {
        Ok(response) => Ok(response),
        Err(err @ Error::Store(_)) => {
            error!("Error: {} ({})", err, err.code().unwrap_or("no error code"));
            err.into_response()
        }
        Err(err) => err.into_response(),
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let sdk_config = config.load_sdk_config().await;
    let store = DynamoAwardStore::new(aws_sdk_dynamodb::Client::new(&sdk_config), config.table_name);

    run(service_fn(|request: LambdaRequest| process_request(request, &store))).await
}
