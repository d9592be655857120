//! Adapters Layer
//!
//! Outbound adapters implementing the domain ports against real services.

pub mod outbound;
