//! ip-api.com Provider
//!
//! Implements GeoProvider for http://ip-api.com.

use super::json_fields::{number, text};
use crate::domain::entities::{Address, NormalizedGeoRecord, ProviderRequest};
use crate::domain::ports::GeoProvider;
use serde_json::Value;

/// Free tier is HTTP only; HTTPS answers 403 "SSL unavailable".
pub const IP_API_COM_URL: &str = "http://ip-api.com";

/// Fields requested from ip-api.com.
const FIELDS: &str = "status,message,country,regionName,city,isp,timezone,lat,lon,query";

/// ip-api.com adapter.
///
/// Answers carry `"status": "success"` or `"status": "fail"` plus a message
/// such as "private range" or "invalid query".
pub struct IpApiComProvider {
    base_url: String,
}

impl IpApiComProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for IpApiComProvider {
    fn default() -> Self {
        Self::new(IP_API_COM_URL)
    }
}

impl GeoProvider for IpApiComProvider {
    fn name(&self) -> &str {
        "ip-api.com"
    }

    fn endpoint_for(&self, address: &Address) -> ProviderRequest {
        ProviderRequest::new(format!("{}/json/{}", self.base_url, address))
            .with_query("fields", FIELDS)
    }

    fn is_successful(&self, body: &Value) -> bool {
        body.get("status").and_then(Value::as_str) == Some("success")
    }

    fn normalize(&self, body: &Value) -> NormalizedGeoRecord {
        NormalizedGeoRecord {
            address: text(body, "/query"),
            country: text(body, "/country"),
            region_name: text(body, "/regionName"),
            city: text(body, "/city"),
            isp: text(body, "/isp"),
            timezone: text(body, "/timezone"),
            latitude: number(body, "/lat"),
            longitude: number(body, "/lon"),
        }
    }
}
