//! ipify Self Address Lookup
//!
//! Implements SelfAddressLookup using https://api.ipify.org.

use super::json_fields::text;
use crate::domain::entities::{Address, ProviderRequest};
use crate::domain::ports::{JsonTransport, SelfAddressLookup};
use async_trait::async_trait;
use std::sync::Arc;

pub const IPIFY_URL: &str = "https://api.ipify.org";

/// Public address lookup via ipify (`?format=json` -> `{"ip": "..."}`).
pub struct IpifySelfAddress {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
}

impl IpifySelfAddress {
    pub fn new(transport: Arc<dyn JsonTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self) -> ProviderRequest {
        ProviderRequest::new(self.base_url.as_str()).with_query("format", "json")
    }
}

#[async_trait]
impl SelfAddressLookup for IpifySelfAddress {
    async fn own_address(&self) -> Option<Address> {
        let body = match self.transport.get_json(&self.request()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("failed to fetch public IP: {}", e);
                return None;
            }
        };

        match text(&body, "/ip") {
            Some(ip) => {
                tracing::info!("public IP detected: {}", ip);
                Some(Address::trusted(ip))
            }
            None => {
                tracing::warn!("public IP response had no address field");
                None
            }
        }
    }
}
