use std::time::Duration;

use catalog_core::{CategoriesPage, QueryVariables};
use serde_json::json;

use crate::decode::decode_categories;
use crate::query::GET_CATEGORIES;

#[derive(Debug, Clone)]
pub struct ExecutorSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/graphql".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    InvalidBody(String),
}

/// Abstract query-execution capability consumed by the loader.
#[async_trait::async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, variables: &QueryVariables)
        -> Result<CategoriesPage, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    settings: ExecutorSettings,
}

impl ReqwestExecutor {
    pub fn new(settings: ExecutorSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl QueryExecutor for ReqwestExecutor {
    async fn execute(
        &self,
        variables: &QueryVariables,
    ) -> Result<CategoriesPage, TransportError> {
        let body = json!({
            "query": GET_CATEGORIES,
            "variables": {
                "ids": variables.ids,
                "first": variables.first,
                "offset": variables.offset,
            },
        });

        let response = self
            .client
            .post(&self.settings.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_categories(&bytes).map_err(|err| TransportError::InvalidBody(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }
    TransportError::Network(err.to_string())
}
