//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of IP geolocation resolution.
//! They have no external dependencies and contain only business logic.

use crate::domain::errors::ResolveError;
use crate::domain::value_objects::{AccuracyLevel, Confidence, ConfidenceLevel};
use serde::{Deserialize, Serialize};

/// An address under resolution, together with its classification.
///
/// Immutable once classified. Use `AddressClassifier::classify` for user
/// input and `Address::trusted` for addresses reported by a self-IP service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    raw: String,
    valid: bool,
    private: bool,
}

impl Address {
    pub(crate) fn from_parts(raw: String, valid: bool, private: bool) -> Self {
        Self {
            raw,
            valid,
            private,
        }
    }

    /// An address known to be public and well-formed.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self::from_parts(raw.into(), true, false)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_syntactically_valid(&self) -> bool {
        self.valid
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Provider-agnostic geographic/ISP profile.
///
/// Any field may be `None`, meaning the provider did not know it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedGeoRecord {
    /// Address echoed back by the provider
    pub address: Option<String>,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    /// IANA zone name, e.g. "America/Los_Angeles"
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NormalizedGeoRecord {
    /// Both coordinates, if the provider supplied both.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// One provider's scored answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderOutcome {
    /// Name of the provider that produced the record
    pub source: String,
    pub record: NormalizedGeoRecord,
    pub confidence: Confidence,
}

impl ProviderOutcome {
    pub fn new(
        source: impl Into<String>,
        record: NormalizedGeoRecord,
        confidence: Confidence,
    ) -> Self {
        Self {
            source: source.into(),
            record,
            confidence,
        }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence.level()
    }
}

/// Outcome of querying every provider for one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    pub success: bool,
    /// Highest-confidence outcome
    pub best: Option<ProviderOutcome>,
    /// Every reachable provider's outcome, by descending confidence
    pub all: Vec<ProviderOutcome>,
    /// Diagnostic text, set only when no provider produced a record
    pub error_summary: Option<String>,
}

impl AggregatedResult {
    /// Rank outcomes and build the aggregate.
    ///
    /// Ranking is a stable sort on confidence, so equal scores keep the
    /// order in which providers were queried.
    pub fn from_outcomes(mut outcomes: Vec<ProviderOutcome>, last_error: Option<String>) -> Self {
        outcomes.sort_by(|a, b| b.confidence.cmp(&a.confidence));

        if outcomes.is_empty() {
            let summary = match last_error {
                Some(e) => format!("All geolocation providers failed. {}", e),
                None => "All geolocation providers failed.".to_string(),
            };
            return Self {
                success: false,
                best: None,
                all: outcomes,
                error_summary: Some(summary),
            };
        }

        Self {
            success: true,
            best: outcomes.first().cloned(),
            all: outcomes,
            error_summary: None,
        }
    }

    /// Take the winning outcome, or the aggregate failure.
    pub fn into_best(self) -> Result<ProviderOutcome, ResolveError> {
        match self.best {
            Some(best) if self.success => Ok(best),
            _ => Err(ResolveError::AllProvidersFailed {
                summary: self.error_summary.unwrap_or_default(),
            }),
        }
    }
}

/// A position fix reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of the 95% confidence circle in meters
    pub accuracy_meters: f64,
}

impl DevicePosition {
    pub fn new(latitude: f64, longitude: f64, accuracy_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters,
        }
    }

    pub fn accuracy_level(&self) -> AccuracyLevel {
        AccuracyLevel::from_meters(self.accuracy_meters)
    }
}

/// Human-readable place attached to a position by reverse geocoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceLabel {
    pub locality: Option<String>,
    pub subdivision: Option<String>,
    pub country: Option<String>,
}

impl PlaceLabel {
    pub fn is_empty(&self) -> bool {
        self.locality.is_none() && self.subdivision.is_none() && self.country.is_none()
    }
}

impl std::fmt::Display for PlaceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = [&self.locality, &self.subdivision, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Result of the precision fallback: a fix plus an optional place name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreciseLocation {
    pub position: DevicePosition,
    /// `None` when reverse geocoding failed or found nothing
    pub place: Option<PlaceLabel>,
}

impl PreciseLocation {
    pub fn new(position: DevicePosition, place: Option<PlaceLabel>) -> Self {
        Self { position, place }
    }

    /// Link that opens the fix in a web map.
    pub fn map_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.position.latitude, self.position.longitude
        )
    }
}

/// An outbound HTTP GET described by a provider adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl ProviderRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
