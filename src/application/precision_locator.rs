//! Precision Locator
//!
//! Higher-precision fallback: one device position fix, then best-effort
//! reverse geocoding to attach a place name.

use crate::domain::entities::{DevicePosition, PlaceLabel, PreciseLocation};
use crate::domain::errors::{LocatorError, PositionError};
use crate::domain::ports::{PositionSource, ReverseGeocoder};
use crate::domain::value_objects::LocatorOptions;
use std::sync::Arc;

/// State of one location attempt.
///
/// `Idle -> Acquiring -> { Resolved | Denied | Unavailable | TimedOut }`.
/// Every attempt starts from `Idle`; terminal states are never left.
#[derive(Debug, Clone, PartialEq)]
pub enum LocatorState {
    Idle,
    Acquiring,
    Resolved(PreciseLocation),
    Denied,
    Unavailable,
    TimedOut,
}

impl LocatorState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Idle | Self::Acquiring)
    }

    /// Convert a terminal state into the caller-facing outcome.
    pub fn into_result(self) -> Result<PreciseLocation, LocatorError> {
        match self {
            Self::Resolved(location) => Ok(location),
            Self::Denied => Err(LocatorError::PermissionDenied),
            Self::TimedOut => Err(LocatorError::Timeout),
            // A non-terminal state carries no fix either
            Self::Unavailable | Self::Idle | Self::Acquiring => Err(LocatorError::Unavailable),
        }
    }
}

impl From<PositionError> for LocatorState {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::PermissionDenied => Self::Denied,
            PositionError::PositionUnavailable => Self::Unavailable,
            PositionError::Timeout => Self::TimedOut,
        }
    }
}

/// Drives a single device fix plus reverse geocoding.
///
/// No retries: each call to `locate` is a fresh attempt.
pub struct PrecisionLocator {
    source: Arc<dyn PositionSource>,
    geocoder: Arc<dyn ReverseGeocoder>,
    options: LocatorOptions,
}

impl PrecisionLocator {
    pub fn new(
        source: Arc<dyn PositionSource>,
        geocoder: Arc<dyn ReverseGeocoder>,
        options: LocatorOptions,
    ) -> Self {
        Self {
            source,
            geocoder,
            options,
        }
    }

    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Run one attempt and return the caller-facing outcome.
    pub async fn locate(&self) -> Result<PreciseLocation, LocatorError> {
        self.run(|_| {}).await.into_result()
    }

    /// Run one attempt, reporting every state the attempt enters.
    ///
    /// Returns the terminal state.
    pub async fn run<F>(&self, mut observe: F) -> LocatorState
    where
        F: FnMut(&LocatorState) + Send,
    {
        let mut state = LocatorState::Idle;
        observe(&state);

        state = LocatorState::Acquiring;
        tracing::debug!(
            "locator: acquiring position (high_accuracy={})",
            self.options.high_accuracy
        );
        observe(&state);

        state = match self.acquire().await {
            Ok(position) => {
                let place = self.describe(&position).await;
                LocatorState::Resolved(PreciseLocation::new(position, place))
            }
            Err(e) => {
                tracing::debug!("locator: position request failed: {}", e);
                LocatorState::from(e)
            }
        };
        observe(&state);
        state
    }

    async fn acquire(&self) -> Result<DevicePosition, PositionError> {
        // Bound the wait here too, in case the device ignores the timeout option
        match tokio::time::timeout(
            self.options.timeout,
            self.source.current_position(&self.options),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(PositionError::Timeout),
        }
    }

    async fn describe(&self, position: &DevicePosition) -> Option<PlaceLabel> {
        match self
            .geocoder
            .resolve_place(position.latitude, position.longitude)
            .await
        {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!("reverse geocoding failed, returning coordinates only: {}", e);
                None
            }
        }
    }
}
