//! ipapi.co Provider
//!
//! Implements GeoProvider for https://ipapi.co.

use super::json_fields::{number, text};
use crate::domain::entities::{Address, NormalizedGeoRecord, ProviderRequest};
use crate::domain::ports::GeoProvider;
use serde_json::Value;

pub const IPAPI_CO_URL: &str = "https://ipapi.co";

/// ipapi.co adapter.
///
/// Success is signalled by the echoed `ip` field. Reserved or rate-limited
/// lookups also echo the address but set `"error": true`.
pub struct IpapiCoProvider {
    base_url: String,
}

impl IpapiCoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for IpapiCoProvider {
    fn default() -> Self {
        Self::new(IPAPI_CO_URL)
    }
}

impl GeoProvider for IpapiCoProvider {
    fn name(&self) -> &str {
        "ipapi.co"
    }

    fn endpoint_for(&self, address: &Address) -> ProviderRequest {
        ProviderRequest::new(format!("{}/{}/json/", self.base_url, address))
    }

    fn is_successful(&self, body: &Value) -> bool {
        let flagged = body.get("error").and_then(Value::as_bool).unwrap_or(false);
        text(body, "/ip").is_some() && !flagged
    }

    fn normalize(&self, body: &Value) -> NormalizedGeoRecord {
        NormalizedGeoRecord {
            address: text(body, "/ip"),
            country: text(body, "/country_name"),
            region_name: text(body, "/region"),
            city: text(body, "/city"),
            isp: text(body, "/org"),
            timezone: text(body, "/timezone"),
            latitude: number(body, "/latitude"),
            longitude: number(body, "/longitude"),
        }
    }
}
