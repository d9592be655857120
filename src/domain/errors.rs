//! Domain Errors
//!
//! Every condition the engine reports is a typed value. Messages are meant
//! to be shown to the end user as-is.

/// Why an address could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Please enter an IP address or track your own public IP")]
    EmptyInput,

    #[error("'{input}' is not a valid IP address. Use the dotted format, e.g. 8.8.8.8 or 1.1.1.1")]
    InvalidFormat { input: String },

    #[error("{address} is a private IP address that only works within a local network; only public IP addresses can be tracked")]
    PrivateAddress { address: String },

    #[error("Failed to detect your public IP address")]
    OwnAddressUnavailable,

    #[error("{summary}")]
    AllProvidersFailed { summary: String },
}

impl ResolveError {
    /// Follow-up the caller can offer the user, if any.
    pub fn suggested_action(&self) -> Option<SuggestedAction> {
        match self {
            Self::EmptyInput | Self::PrivateAddress { .. } => {
                Some(SuggestedAction::TrackPublicAddress)
            }
            _ => None,
        }
    }
}

/// Action hint attached to a resolution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestedAction {
    /// Retry with the caller's own public address
    TrackPublicAddress,
}

/// Failure of a single outbound HTTP call.
///
/// Never fatal: the aggregator records it and moves on to the next provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Cause reported by the device positioning capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timeout")]
    Timeout,
}

/// Terminal failure of a precision location attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
    #[error("Location access was denied. Please allow location permissions and try again.")]
    PermissionDenied,

    #[error("Location information is unavailable. Please check your device settings.")]
    Unavailable,

    #[error("Location request timed out. Please try again.")]
    Timeout,

    #[error("Geolocation is not supported on this device")]
    Unsupported,
}

impl From<PositionError> for LocatorError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::PermissionDenied => Self::PermissionDenied,
            PositionError::PositionUnavailable => Self::Unavailable,
            PositionError::Timeout => Self::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_errors_have_distinct_messages() {
        let messages = vec![
            ResolveError::EmptyInput.to_string(),
            ResolveError::InvalidFormat {
                input: "abc".to_string(),
            }
            .to_string(),
            ResolveError::PrivateAddress {
                address: "10.0.0.1".to_string(),
            }
            .to_string(),
            ResolveError::OwnAddressUnavailable.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_private_address_message_carries_address() {
        let err = ResolveError::PrivateAddress {
            address: "192.168.1.1".to_string(),
        };
        assert!(err.to_string().starts_with("192.168.1.1 is a private IP address"));
        assert_eq!(err.suggested_action(), Some(SuggestedAction::TrackPublicAddress));
    }

    #[test]
    fn test_invalid_format_has_guidance_and_no_action() {
        let err = ResolveError::InvalidFormat {
            input: "8.8.8".to_string(),
        };
        assert!(err.to_string().contains("8.8.8.8"));
        assert_eq!(err.suggested_action(), None);
    }

    #[test]
    fn test_all_providers_failed_shows_summary() {
        let err = ResolveError::AllProvidersFailed {
            summary: "All geolocation providers failed. ipwhois failed: HTTP 500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "All geolocation providers failed. ipwhois failed: HTTP 500"
        );
    }

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::Status(503).to_string(), "HTTP 503");
        assert!(TransportError::Request("dns error".to_string())
            .to_string()
            .contains("dns error"));
    }

    #[test]
    fn test_position_error_maps_to_locator_error() {
        assert_eq!(
            LocatorError::from(PositionError::PermissionDenied),
            LocatorError::PermissionDenied
        );
        assert_eq!(
            LocatorError::from(PositionError::PositionUnavailable),
            LocatorError::Unavailable
        );
        assert_eq!(LocatorError::from(PositionError::Timeout), LocatorError::Timeout);
    }

    #[test]
    fn test_locator_errors_have_distinct_messages() {
        let all = [
            LocatorError::PermissionDenied,
            LocatorError::Unavailable,
            LocatorError::Timeout,
            LocatorError::Unsupported,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
