//! Provider Aggregator
//!
//! Queries every geolocation provider for one address and ranks the answers.

use crate::domain::entities::{Address, AggregatedResult, ProviderOutcome};
use crate::domain::errors::TransportError;
use crate::domain::ports::{GeoProvider, JsonTransport};
use crate::domain::services::ResultScorer;
use std::sync::Arc;

/// Trial-all aggregation over a fixed list of providers.
///
/// Providers are queried one after another, in list order. A provider that
/// fails (transport error) or declines (no data) is left out; it never stops
/// the remaining providers from being asked. Once every provider has been
/// tried the outcomes are ranked by confidence, ties keeping list order.
pub struct ProviderAggregator {
    providers: Vec<Arc<dyn GeoProvider>>,
    transport: Arc<dyn JsonTransport>,
}

impl ProviderAggregator {
    pub fn new(providers: Vec<Arc<dyn GeoProvider>>, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            providers,
            transport,
        }
    }

    /// Names of the configured providers, in query order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolve `address` against every provider.
    ///
    /// The address must already be known to be public and well-formed.
    #[tracing::instrument(skip(self, address), fields(address = %address))]
    pub async fn resolve(&self, address: &Address) -> AggregatedResult {
        let mut outcomes = Vec::with_capacity(self.providers.len());
        let mut last_error = None;

        for provider in &self.providers {
            match self.query(provider.as_ref(), address).await {
                Ok(Some(outcome)) => {
                    tracing::debug!(
                        "{} answered with confidence {}",
                        outcome.source,
                        outcome.confidence
                    );
                    outcomes.push(outcome);
                }
                Ok(None) => {
                    tracing::debug!("{} reported no data for {}", provider.name(), address);
                }
                Err(e) => {
                    let message = format!("{} failed: {}", provider.name(), e);
                    tracing::warn!("{}", message);
                    last_error = Some(message);
                }
            }
        }

        let result = AggregatedResult::from_outcomes(outcomes, last_error);
        match &result.best {
            Some(best) => tracing::debug!(
                "best result from {} ({}/{} providers answered)",
                best.source,
                result.all.len(),
                self.providers.len()
            ),
            None => tracing::warn!("no provider could locate {}", address),
        }
        result
    }

    /// Query-validate-normalize-score pipeline for a single provider.
    async fn query(
        &self,
        provider: &dyn GeoProvider,
        address: &Address,
    ) -> Result<Option<ProviderOutcome>, TransportError> {
        let body = self
            .transport
            .get_json(&provider.endpoint_for(address))
            .await?;

        if !provider.is_successful(&body) {
            return Ok(None);
        }

        let record = provider.normalize(&body);
        let confidence = ResultScorer::score(&record);
        Ok(Some(ProviderOutcome::new(provider.name(), record, confidence)))
    }
}
