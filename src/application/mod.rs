//! Application Layer - Use cases
//!
//! Orchestrates the domain services and ports into the three requests the
//! UI layer can make.

mod precision_locator;
mod provider_aggregator;
mod resolution_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use precision_locator::{LocatorState, PrecisionLocator};
pub use provider_aggregator::ProviderAggregator;
pub use resolution_service::ResolutionService;
