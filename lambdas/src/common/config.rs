use aws_config::{BehaviorVersion, Region, SdkConfig};
use thiserror::Error;

const TABLE_NAME_VAR: &str = "AWARDS_TABLE_NAME";
const REGION_VAR: &str = "REGION";
const ENDPOINT_VAR: &str = "DYNAMODB_ENDPOINT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Environment supplied settings of the awards lambdas.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|val| !val.trim().is_empty());

        let table_name = non_empty(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;

        Ok(Self {
            table_name,
            region: non_empty(REGION_VAR),
            endpoint_url: non_empty(ENDPOINT_VAR),
        })
    }

    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }
}
