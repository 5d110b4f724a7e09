//! Upstream data access.
//!
//! `DataSource` is the seam between the dashboard and the network: the
//! production source is [`ApiClient`], tests plug in canned sources.
//! [`fetch_records`] collapses every failure into [`FetchOutcome::Failed`]
//! so load routines never see an error.

mod client;

pub use client::ApiClient;

use crate::error::{DashboardError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

/// The four upstream data categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GeneralInfo,
    Prices,
    News,
    Sentiment,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::GeneralInfo,
        Endpoint::Prices,
        Endpoint::News,
        Endpoint::Sentiment,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GeneralInfo => "/api/general_info",
            Endpoint::Prices => "/api/prices",
            Endpoint::News => "/api/news",
            Endpoint::Sentiment => "/api/sentiment",
        }
    }
}

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get_json(&self, endpoint: Endpoint) -> Result<Value>;
}

/// Result of one fetch: either the decoded records or a failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Records(Vec<T>),
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

pub async fn fetch_records<T>(source: &dyn DataSource, endpoint: Endpoint) -> FetchOutcome<T>
where
    T: DeserializeOwned,
{
    let body = match source.get_json(endpoint).await {
        Ok(body) => body,
        Err(e) => {
            error!("Error fetching {}: {}", endpoint.path(), e);
            return FetchOutcome::Failed(e.to_string());
        }
    };

    match decode_records(body) {
        Ok(records) => FetchOutcome::Records(records),
        Err(e) => {
            warn!("Rejected payload from {}: {}", endpoint.path(), e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}

fn decode_records<T: DeserializeOwned>(body: Value) -> Result<Vec<T>> {
    match body {
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        Value::Object(ref map) => {
            let message = map
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("expected a JSON array");
            Err(DashboardError::UnexpectedPayload(message.to_string()))
        }
        other => Err(DashboardError::UnexpectedPayload(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
