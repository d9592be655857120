//! Geolocation Provider Port
//!
//! Defines the capability set every IP geolocation provider adapter offers.

use crate::domain::entities::{Address, NormalizedGeoRecord, ProviderRequest};
use serde_json::Value;

/// Adapter for one third-party IP geolocation service.
///
/// This is an outbound port. Implementations only describe the request and
/// interpret the JSON body; the aggregator owns the network call. Each
/// provider signals "no data" differently, so the success rule lives here
/// and a rejected response is a normal outcome rather than an error.
pub trait GeoProvider: Send + Sync {
    /// Short provider name, reported as the outcome source.
    fn name(&self) -> &str;

    /// Build the GET request that looks up `address`.
    fn endpoint_for(&self, address: &Address) -> ProviderRequest;

    /// Whether the body carries a usable answer.
    fn is_successful(&self, body: &Value) -> bool;

    /// Map the provider's field names onto the common record.
    ///
    /// Missing, null or blank source fields yield `None`.
    fn normalize(&self, body: &Value) -> NormalizedGeoRecord;
}
