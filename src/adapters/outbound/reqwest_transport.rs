//! Reqwest JSON Transport
//!
//! Implements JsonTransport on top of a shared `reqwest::Client`.

use crate::domain::entities::ProviderRequest;
use crate::domain::errors::TransportError;
use crate::domain::ports::JsonTransport;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP transport backed by reqwest.
///
/// The client pools connections but keeps no per-request state, so one
/// transport can be shared by every adapter.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, request: &ProviderRequest) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", request.url, status);
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
