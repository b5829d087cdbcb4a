//! # ORS Core
//!
//! Core types and configuration for the openrouteservice API client.
//!
//! This crate provides:
//! - Client configuration with construction-time validation
//! - The rate-limit snapshot reported by the upstream service
//! - Request and response types for every endpoint family
//!
//! The HTTP pipeline that actually issues requests lives in `ors-http`;
//! this crate is pure data and carries no transport dependency.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ors_core::{ClientConfig, Profile};
//! use ors_core::directions::DirectionsPostRequest;
//!
//! let config = ClientConfig::new("my-api-key");
//! config.validate()?;
//!
//! let request = DirectionsPostRequest {
//!     coordinates: vec![[8.681495, 49.41461], [8.686507, 49.41943]],
//!     ..Default::default()
//! };
//! ```

pub mod common;
pub mod config;
pub mod directions;
pub mod elevation;
pub mod export;
pub mod geocoding;
pub mod isochrones;
pub mod matrix;
pub mod optimization;
pub mod pois;
pub mod ratelimit;
pub mod snap;

// Re-exports for convenience
pub use common::{BoundingBox, Coordinate, DistanceUnit, HealthStatus, Metadata, Profile};
pub use config::{ApiVersion, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use ratelimit::RateLimitSnapshot;
