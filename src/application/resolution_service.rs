//! Resolution Service - Main application use case
//!
//! Entry point for the UI layer. Validates user input, picks the address to
//! resolve and hands it to the aggregator, or runs the precision locator.

use crate::adapters::outbound::{
    BigDataCloudReverseGeocoder, IpApiComProvider, IpWhoisProvider, IpapiCoProvider,
    IpifySelfAddress, ReqwestTransport,
};
use crate::application::{PrecisionLocator, ProviderAggregator};
use crate::config::Config;
use crate::domain::entities::{AggregatedResult, PreciseLocation};
use crate::domain::errors::{LocatorError, ResolveError};
use crate::domain::ports::{GeoProvider, JsonTransport, PositionSource, SelfAddressLookup};
use crate::domain::services::AddressClassifier;
use std::sync::Arc;

/// Resolution facade.
///
/// Three requests are supported:
/// 1. `resolve` for an address typed by the user
/// 2. `resolve_own_address` for the caller's public address
/// 3. `locate_precisely` for a device fix
pub struct ResolutionService {
    aggregator: ProviderAggregator,
    self_lookup: Arc<dyn SelfAddressLookup>,
    locator: Option<PrecisionLocator>,
}

impl ResolutionService {
    pub fn new(aggregator: ProviderAggregator, self_lookup: Arc<dyn SelfAddressLookup>) -> Self {
        Self {
            aggregator,
            self_lookup,
            locator: None,
        }
    }

    /// Attach a precision locator (device capability present).
    pub fn with_locator(mut self, locator: PrecisionLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Wire the default HTTP adapters from configuration.
    ///
    /// Providers are queried in the order ipapi.co, ip-api.com, ipwhois.
    /// Without a `position_source` precision requests report `Unsupported`.
    pub fn from_config(
        config: &Config,
        position_source: Option<Arc<dyn PositionSource>>,
    ) -> anyhow::Result<Self> {
        let transport: Arc<dyn JsonTransport> =
            Arc::new(ReqwestTransport::new(config.request_timeout())?);

        let providers: Vec<Arc<dyn GeoProvider>> = vec![
            Arc::new(IpapiCoProvider::new(config.ipapi_co_url.as_str())),
            Arc::new(IpApiComProvider::new(config.ip_api_com_url.as_str())),
            Arc::new(IpWhoisProvider::new(config.ipwhois_url.as_str())),
        ];
        let aggregator = ProviderAggregator::new(providers, transport.clone());
        let self_lookup = Arc::new(IpifySelfAddress::new(
            transport.clone(),
            config.self_ip_url.as_str(),
        ));

        let mut service = Self::new(aggregator, self_lookup);
        if let Some(source) = position_source {
            let geocoder = Arc::new(BigDataCloudReverseGeocoder::new(
                transport,
                config.reverse_geocode_url.as_str(),
                config.locality_language.as_str(),
            ));
            service = service.with_locator(PrecisionLocator::new(
                source,
                geocoder,
                config.locator_options(),
            ));
        }

        tracing::info!(
            "resolution service ready (providers: {}, precision: {})",
            service.aggregator.provider_names().join(", "),
            service.locator.is_some()
        );
        Ok(service)
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.aggregator.provider_names()
    }

    pub fn supports_precise_location(&self) -> bool {
        self.locator.is_some()
    }

    /// Resolve an address typed by the user.
    ///
    /// Input is trimmed first. Empty, private and malformed input are
    /// rejected without any outbound call; anything else returns the
    /// aggregate as-is, including a failed one.
    pub async fn resolve(&self, input: &str) -> Result<AggregatedResult, ResolveError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let address = AddressClassifier::classify(text);
        if address.is_private() {
            tracing::debug!("rejected private address {}", address);
            return Err(ResolveError::PrivateAddress {
                address: address.as_str().to_string(),
            });
        }
        if !address.is_syntactically_valid() {
            tracing::debug!("rejected malformed input '{}'", text);
            return Err(ResolveError::InvalidFormat {
                input: text.to_string(),
            });
        }

        Ok(self.aggregator.resolve(&address).await)
    }

    /// Resolve the caller's own public address.
    ///
    /// The detected address skips the private and format checks.
    pub async fn resolve_own_address(&self) -> Result<AggregatedResult, ResolveError> {
        let address = self
            .self_lookup
            .own_address()
            .await
            .ok_or(ResolveError::OwnAddressUnavailable)?;

        Ok(self.aggregator.resolve(&address).await)
    }

    /// Run one precision location attempt.
    pub async fn locate_precisely(&self) -> Result<PreciseLocation, LocatorError> {
        match &self.locator {
            Some(locator) => locator.locate().await,
            None => {
                tracing::warn!(
                    "precise location requested but no positioning capability configured"
                );
                Err(LocatorError::Unsupported)
            }
        }
    }
}
