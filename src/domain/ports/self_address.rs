//! Self Address Port

use crate::domain::entities::Address;
use async_trait::async_trait;

/// Discovers the caller's own public address.
#[async_trait]
pub trait SelfAddressLookup: Send + Sync {
    /// Single attempt; `None` on any failure.
    async fn own_address(&self) -> Option<Address>;
}
