//! ipwho.is Provider
//!
//! Implements GeoProvider for https://ipwho.is.

use super::json_fields::{number, text};
use crate::domain::entities::{Address, NormalizedGeoRecord, ProviderRequest};
use crate::domain::ports::GeoProvider;
use serde_json::Value;

pub const IPWHOIS_URL: &str = "https://ipwho.is";

/// ipwho.is adapter.
///
/// ISP and timezone live in nested `connection` and `timezone` objects.
pub struct IpWhoisProvider {
    base_url: String,
}

impl IpWhoisProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for IpWhoisProvider {
    fn default() -> Self {
        Self::new(IPWHOIS_URL)
    }
}

impl GeoProvider for IpWhoisProvider {
    fn name(&self) -> &str {
        "ipwhois"
    }

    fn endpoint_for(&self, address: &Address) -> ProviderRequest {
        ProviderRequest::new(format!("{}/{}", self.base_url, address))
    }

    fn is_successful(&self, body: &Value) -> bool {
        body.get("success").and_then(Value::as_bool) == Some(true)
    }

    fn normalize(&self, body: &Value) -> NormalizedGeoRecord {
        NormalizedGeoRecord {
            address: text(body, "/ip"),
            country: text(body, "/country"),
            region_name: text(body, "/region"),
            city: text(body, "/city"),
            isp: text(body, "/connection/isp"),
            timezone: text(body, "/timezone/id"),
            latitude: number(body, "/latitude"),
            longitude: number(body, "/longitude"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "ip": "1.1.1.1",
            "success": true,
            "type": "IPv4",
            "continent": "Oceania",
            "country": "Australia",
            "country_code": "AU",
            "region": "Queensland",
            "city": "Brisbane",
            "latitude": -27.4705,
            "longitude": 153.026,
            "connection": {
                "asn": 13335,
                "org": "APNIC and Cloudflare DNS Resolver project",
                "isp": "Cloudflare, Inc.",
                "domain": "cloudflare.com"
            },
            "timezone": {
                "id": "Australia/Brisbane",
                "abbr": "AEST",
                "utc": "+10:00"
            }
        })
    }

    #[test]
    fn test_endpoint_for() {
        let req = IpWhoisProvider::default().endpoint_for(&Address::trusted("1.1.1.1"));
        assert_eq!(req.url, "https://ipwho.is/1.1.1.1");
    }

    #[test]
    fn test_is_successful() {
        let provider = IpWhoisProvider::default();

        assert!(provider.is_successful(&sample()));
        assert!(!provider.is_successful(&json!({
            "ip": "10.0.0.1",
            "success": false,
            "message": "Reserved range"
        })));
        assert!(!provider.is_successful(&json!({"success": "true"})));
    }

    #[test]
    fn test_normalize_reads_nested_objects() {
        let record = IpWhoisProvider::default().normalize(&sample());

        assert_eq!(record.address.as_deref(), Some("1.1.1.1"));
        assert_eq!(record.country.as_deref(), Some("Australia"));
        assert_eq!(record.region_name.as_deref(), Some("Queensland"));
        assert_eq!(record.city.as_deref(), Some("Brisbane"));
        assert_eq!(record.isp.as_deref(), Some("Cloudflare, Inc."));
        assert_eq!(record.timezone.as_deref(), Some("Australia/Brisbane"));
        assert_eq!(record.coordinates(), Some((-27.4705, 153.026)));
    }

    #[test]
    fn test_normalize_missing_connection() {
        let record = IpWhoisProvider::default().normalize(&json!({
            "ip": "1.1.1.1",
            "success": true,
            "country": "Australia",
            "timezone": "Australia/Brisbane"
        }));

        assert_eq!(record.isp, None);
        // Flat timezone strings are not the documented shape
        assert_eq!(record.timezone, None);
        assert_eq!(record.country.as_deref(), Some("Australia"));
    }
}
