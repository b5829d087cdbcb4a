//! # openrouteservice HTTP client
//!
//! Typed async client for the [openrouteservice](https://openrouteservice.org)
//! API: directions, matrix, isochrones, geocoding, POIs, optimization,
//! elevation, snapping, and graph export.
//!
//! This crate provides:
//! - A shared request pipeline handling auth, timeouts, rate-limit
//!   capture, and structured errors
//! - Per-family service handles built on that pipeline
//! - A minimum-interval throttle for the geocoding endpoints
//!
//! Request and response types live in [`ors_core`].
//!
//! ## Example
//!
//! ```ignore
//! use ors_core::{ClientConfig, Profile};
//! use ors_core::matrix::MatrixRequest;
//! use ors_http::OpenRouteService;
//!
//! let ors = OpenRouteService::new(ClientConfig::new(api_key))?;
//! let matrix = ors
//!     .matrix()
//!     .calculate(Profile::DrivingCar, &MatrixRequest {
//!         locations: vec![[9.70093, 48.477473], [9.207916, 49.153868]],
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod client;
mod directions;
mod elevation;
mod error;
mod export;
mod geocoding;
mod isochrones;
mod matrix;
mod optimization;
mod ors;
mod params;
mod pois;
mod snap;
mod throttle;

pub use client::OrsClient;
pub use directions::DirectionsService;
pub use elevation::ElevationService;
pub use error::{status_description, OrsError};
pub use export::ExportService;
pub use geocoding::GeocodingService;
pub use isochrones::IsochronesService;
pub use matrix::MatrixService;
pub use optimization::OptimizationService;
pub use ors::OpenRouteService;
pub use params::to_query_pairs;
pub use pois::PoisService;
pub use snap::SnapService;
pub use throttle::{ThrottleGate, MIN_REQUEST_INTERVAL};
