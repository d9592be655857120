//! Reverse Geocoder Port
//!
//! Turns coordinates into a human-readable place.

use crate::domain::entities::PlaceLabel;
use crate::domain::errors::TransportError;
use async_trait::async_trait;

/// Reverse geocoding service.
///
/// `Ok(None)` means the service answered but knew no place for the
/// coordinates.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn resolve_place(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<PlaceLabel>, TransportError>;
}
