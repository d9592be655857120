//! JSON Transport Port
//!
//! Abstracts the HTTP client used by every outbound adapter.

use crate::domain::entities::ProviderRequest;
use crate::domain::errors::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Performs one HTTP GET and decodes the JSON body.
///
/// Non-2xx statuses, connectivity faults and undecodable bodies are all
/// reported as `TransportError`. No retries.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, request: &ProviderRequest) -> Result<Value, TransportError>;
}
