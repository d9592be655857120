//! Position Source Port
//!
//! Boundary to the device's location capability (GPS, Wi-Fi positioning).
//! The hosting UI layer provides the implementation.

use crate::domain::entities::DevicePosition;
use crate::domain::errors::PositionError;
use crate::domain::value_objects::LocatorOptions;
use async_trait::async_trait;

/// Device location capability.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Request a single position fix honoring `options`.
    async fn current_position(
        &self,
        options: &LocatorOptions,
    ) -> Result<DevicePosition, PositionError>;
}
