//! Infrastructure Layer
//!
//! Cross-cutting concerns.

pub mod telemetry;

pub use telemetry::init_tracing;
