//! BigDataCloud Reverse Geocoder
//!
//! Implements ReverseGeocoder using the BigDataCloud client-side endpoint.

use super::json_fields::text;
use crate::domain::entities::{PlaceLabel, ProviderRequest};
use crate::domain::errors::TransportError;
use crate::domain::ports::{JsonTransport, ReverseGeocoder};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub const BIGDATACLOUD_URL: &str = "https://api.bigdatacloud.net";

const REVERSE_GEOCODE_PATH: &str = "/data/reverse-geocode-client";

/// BigDataCloud reverse geocoder.
///
/// Locality falls back to `city` when `locality` is blank.
pub struct BigDataCloudReverseGeocoder {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
    language: String,
}

impl BigDataCloudReverseGeocoder {
    pub fn new(
        transport: Arc<dyn JsonTransport>,
        base_url: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
        }
    }

    fn endpoint_for(&self, latitude: f64, longitude: f64) -> ProviderRequest {
        ProviderRequest::new(format!("{}{}", self.base_url, REVERSE_GEOCODE_PATH))
            .with_query("latitude", latitude.to_string())
            .with_query("longitude", longitude.to_string())
            .with_query("localityLanguage", self.language.as_str())
    }

    fn normalize(body: &Value) -> Option<PlaceLabel> {
        let label = PlaceLabel {
            locality: text(body, "/locality").or_else(|| text(body, "/city")),
            subdivision: text(body, "/principalSubdivision"),
            country: text(body, "/countryName"),
        };

        if label.is_empty() {
            None
        } else {
            Some(label)
        }
    }
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudReverseGeocoder {
    async fn resolve_place(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<PlaceLabel>, TransportError> {
        let body = self
            .transport
            .get_json(&self.endpoint_for(latitude, longitude))
            .await?;
        Ok(Self::normalize(&body))
    }
}
