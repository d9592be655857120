//! geolocate Library
//!
//! IP geolocation resolution engine: address classification, multi-provider
//! lookup with confidence ranking, self-IP detection and device-based
//! precision location.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{LocatorState, PrecisionLocator, ProviderAggregator, ResolutionService};
pub use config::{load_config, Config};
pub use domain::entities::{
    Address, AggregatedResult, DevicePosition, NormalizedGeoRecord, PlaceLabel, PreciseLocation,
    ProviderOutcome,
};
pub use domain::errors::{
    LocatorError, PositionError, ResolveError, SuggestedAction, TransportError,
};
pub use domain::ports::{
    GeoProvider, JsonTransport, PositionSource, ReverseGeocoder, SelfAddressLookup,
};
pub use domain::services::{AddressClassifier, ResultScorer};
pub use domain::value_objects::{AccuracyLevel, Confidence, ConfidenceLevel, LocatorOptions};
pub use infrastructure::init_tracing;
