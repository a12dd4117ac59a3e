use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

const KEY_CONDITION_EXPRESSION: &str = "movieId = :m AND awardBody = :a";

pub type AwardRecord = Map<String, Value>;

type DynamoDbItem = HashMap<String, AttributeValue>;

/// Composite key of the awards table: `movieId` (N) is the partition key,
/// `awardBody` (S) the sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardKey {
    pub movie_id: i64,
    pub award_body: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Query {
        code: Option<String>,
        message: String,
    },
    #[error("{0}")]
    Decode(#[from] serde_dynamo::Error),
}

impl StoreError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Query { code, .. } => code.as_deref(),
            Self::Decode(_) => None,
        }
    }
}

impl From<SdkError<QueryError>> for StoreError {
    fn from(err: SdkError<QueryError>) -> Self {
        let message = match err.message() {
            Some(message) => message.to_string(),
            None => DisplayErrorContext(&err).to_string(),
        };

        Self::Query {
            code: err.code().map(str::to_string),
            message,
        }
    }
}

#[async_trait]
pub trait AwardStore: Send + Sync {
    /// Every record stored under exactly `key`, in store order.
    async fn find_awards(&self, key: &AwardKey) -> Result<Vec<AwardRecord>, StoreError>;
}

pub struct DynamoAwardStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoAwardStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl AwardStore for DynamoAwardStore {
    async fn find_awards(&self, key: &AwardKey) -> Result<Vec<AwardRecord>, StoreError> {
        info!("Querying {} for {:?}", self.table_name, key);
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(KEY_CONDITION_EXPRESSION)
            .expression_attribute_values(":m", AttributeValue::N(key.movie_id.to_string()))
            .expression_attribute_values(":a", AttributeValue::S(key.award_body.clone()))
            .send()
            .await?;

        decode_items(output.items.unwrap_or_default())
    }
}

/// Numbers stay numbers: `N` becomes an integer when it is integral and a
/// float otherwise. Binary values (`B`, `BS`) become base64 strings.
pub fn decode_items(items: Vec<DynamoDbItem>) -> Result<Vec<AwardRecord>, StoreError> {
    let items: Vec<DynamoDbItem> = items.into_iter().map(encode_binary_item).collect();
    Ok(serde_dynamo::from_items(items)?)
}

// serde_json::Value has no byte visitor, so binaries are rewritten as strings first.
fn encode_binary_item(item: DynamoDbItem) -> DynamoDbItem {
    item.into_iter()
        .map(|(name, val)| (name, encode_binary(val)))
        .collect()
}

fn encode_binary(value: AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::B(blob) => {
            AttributeValue::S(general_purpose::STANDARD.encode(blob.as_ref()))
        }
        AttributeValue::Bs(blobs) => AttributeValue::Ss(
            blobs
                .iter()
                .map(|blob| general_purpose::STANDARD.encode(blob.as_ref()))
                .collect(),
        ),
        AttributeValue::L(values) => {
            AttributeValue::L(values.into_iter().map(encode_binary).collect())
        }
        AttributeValue::M(item) => AttributeValue::M(encode_binary_item(item)),
        other => other,
    }
}
