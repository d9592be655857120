//! Mock port implementations shared by the application tests.

use crate::domain::entities::{
    Address, DevicePosition, NormalizedGeoRecord, PlaceLabel, ProviderRequest,
};
use crate::domain::errors::{PositionError, TransportError};
use crate::domain::ports::{
    GeoProvider, JsonTransport, PositionSource, ReverseGeocoder, SelfAddressLookup,
};
use crate::domain::value_objects::LocatorOptions;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Provider speaking a generic schema: `{"ok": true, "city": .., "regionName": ..,
/// "country": .., "isp": .., "lat": .., "lon": ..}` at `fixture://<name>/<addr>`.
pub struct StubProvider {
    name: &'static str,
}

impl StubProvider {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn url(name: &str, address: &str) -> String {
        format!("fixture://{}/{}", name, address)
    }
}

impl GeoProvider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn endpoint_for(&self, address: &Address) -> ProviderRequest {
        ProviderRequest::new(Self::url(self.name, address.as_str()))
    }

    fn is_successful(&self, body: &Value) -> bool {
        body.get("ok").and_then(Value::as_bool) == Some(true)
    }

    fn normalize(&self, body: &Value) -> NormalizedGeoRecord {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(String::from);
        NormalizedGeoRecord {
            address: text("ip"),
            country: text("country"),
            region_name: text("regionName"),
            city: text("city"),
            isp: text("isp"),
            timezone: text("timezone"),
            latitude: body.get("lat").and_then(Value::as_f64),
            longitude: body.get("lon").and_then(Value::as_f64),
        }
    }
}

/// Transport answering from a URL -> response table and recording every call.
#[derive(Default)]
pub struct FixtureTransport {
    responses: HashMap<String, Result<Value, TransportError>>,
    calls: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: String, response: Result<Value, TransportError>) -> Self {
        self.responses.insert(url, response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonTransport for FixtureTransport {
    async fn get_json(&self, request: &ProviderRequest) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(request.url.clone());
        self.responses
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Request("connection refused".to_string())))
    }
}

/// Self-address lookup with a canned answer.
pub struct FixedSelfAddress(pub Option<&'static str>);

#[async_trait]
impl SelfAddressLookup for FixedSelfAddress {
    async fn own_address(&self) -> Option<Address> {
        self.0.map(Address::trusted)
    }
}

/// Device capability with a canned answer and an optional delay.
pub struct MockPositionSource {
    result: Result<DevicePosition, PositionError>,
    delay: Duration,
    seen_options: Mutex<Option<LocatorOptions>>,
}

impl MockPositionSource {
    pub fn new(result: Result<DevicePosition, PositionError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            seen_options: Mutex::new(None),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn seen_options(&self) -> Option<LocatorOptions> {
        *self.seen_options.lock().unwrap()
    }
}

#[async_trait]
impl PositionSource for MockPositionSource {
    async fn current_position(
        &self,
        options: &LocatorOptions,
    ) -> Result<DevicePosition, PositionError> {
        *self.seen_options.lock().unwrap() = Some(*options);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result
    }
}

/// Reverse geocoder with a canned answer and a call counter.
pub struct MockGeocoder {
    result: Result<Option<PlaceLabel>, TransportError>,
    calls: AtomicUsize,
}

impl MockGeocoder {
    pub fn new(result: Result<Option<PlaceLabel>, TransportError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for MockGeocoder {
    async fn resolve_place(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<PlaceLabel>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
