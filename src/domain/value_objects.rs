//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Confidence score (0-100) assigned to a normalized provider record.
///
/// Higher is better. Scores are recomputed for every request and never
/// carried between resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: Confidence = Confidence(100);
    pub const ZERO: Confidence = Confidence(0);

    /// Create a confidence score, capped at 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Display bucket for this score.
    pub fn level(self) -> ConfidenceLevel {
        match self.0 {
            70..=u8::MAX => ConfidenceLevel::High,
            50..=69 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse confidence label shown next to an IP-based result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accuracy label for a device-reported position.
///
/// Buckets the reported radius in meters: High (<= 50), Good (<= 100),
/// Moderate (<= 500), Low otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccuracyLevel {
    High,
    Good,
    Moderate,
    Low,
}

impl AccuracyLevel {
    pub fn from_meters(accuracy_meters: f64) -> Self {
        if accuracy_meters <= 50.0 {
            Self::High
        } else if accuracy_meters <= 100.0 {
            Self::Good
        } else if accuracy_meters <= 500.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for AccuracyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options passed to the device positioning capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Ask the device for its most precise fix (GPS rather than network)
    pub high_accuracy: bool,
    /// Upper bound on how long a fix may take
    pub timeout: Duration,
    /// Maximum age of a cached fix the device may return (zero = always fresh)
    pub maximum_age: Duration,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(15_000),
            maximum_age: Duration::ZERO,
        }
    }
}
