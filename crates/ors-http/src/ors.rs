//! Top-level openrouteservice handle

use std::sync::Arc;

use ors_core::common::HealthStatus;
use ors_core::{ApiVersion, ClientConfig, RateLimitSnapshot};

use crate::client::OrsClient;
use crate::directions::DirectionsService;
use crate::elevation::ElevationService;
use crate::error::OrsError;
use crate::export::ExportService;
use crate::geocoding::GeocodingService;
use crate::isochrones::IsochronesService;
use crate::matrix::MatrixService;
use crate::optimization::OptimizationService;
use crate::pois::PoisService;
use crate::snap::SnapService;
use crate::throttle::ThrottleGate;

/// One configured connection to an openrouteservice instance.
///
/// All endpoint families share a single request pipeline, so the
/// rate-limit snapshot and the base headers are common to every call
/// made through this handle.
///
/// # Example
///
/// ```ignore
/// use ors_http::OpenRouteService;
/// use ors_core::{ClientConfig, Profile};
/// use ors_core::directions::DirectionsGetRequest;
///
/// let ors = OpenRouteService::new(ClientConfig::new(api_key))?;
/// let route = ors
///     .directions()
///     .route(Profile::DrivingCar, &DirectionsGetRequest {
///         start: [8.681495, 49.41461],
///         end: [8.687872, 49.420318],
///     })
///     .await?;
/// ```
#[derive(Debug)]
pub struct OpenRouteService {
    client: Arc<OrsClient>,
    directions: DirectionsService,
    matrix: MatrixService,
    isochrones: IsochronesService,
    geocoding: GeocodingService,
    pois: PoisService,
    optimization: OptimizationService,
    elevation: ElevationService,
    snap: SnapService,
    export: ExportService,
}

impl OpenRouteService {
    /// Validate the configuration and build all service handles.
    pub fn new(config: ClientConfig) -> Result<Self, OrsError> {
        let client = Arc::new(OrsClient::new(config)?);
        Ok(Self::from_client(client, ThrottleGate::global().clone()))
    }

    /// Build with an explicit throttle gate for the geocoding family.
    pub fn with_throttle_gate(config: ClientConfig, gate: ThrottleGate) -> Result<Self, OrsError> {
        let client = Arc::new(OrsClient::new(config)?);
        Ok(Self::from_client(client, gate))
    }

    fn from_client(client: Arc<OrsClient>, gate: ThrottleGate) -> Self {
        Self {
            directions: DirectionsService::new(client.clone()),
            matrix: MatrixService::new(client.clone()),
            isochrones: IsochronesService::new(client.clone()),
            geocoding: GeocodingService::with_gate(client.clone(), gate),
            pois: PoisService::new(client.clone()),
            optimization: OptimizationService::new(client.clone()),
            elevation: ElevationService::new(client.clone()),
            snap: SnapService::new(client.clone()),
            export: ExportService::new(client.clone()),
            client,
        }
    }

    pub fn directions(&self) -> &DirectionsService {
        &self.directions
    }

    pub fn matrix(&self) -> &MatrixService {
        &self.matrix
    }

    pub fn isochrones(&self) -> &IsochronesService {
        &self.isochrones
    }

    pub fn geocoding(&self) -> &GeocodingService {
        &self.geocoding
    }

    pub fn pois(&self) -> &PoisService {
        &self.pois
    }

    pub fn optimization(&self) -> &OptimizationService {
        &self.optimization
    }

    pub fn elevation(&self) -> &ElevationService {
        &self.elevation
    }

    pub fn snap(&self) -> &SnapService {
        &self.snap
    }

    pub fn export(&self) -> &ExportService {
        &self.export
    }

    /// Liveness of the instance, served unversioned at `/health`.
    pub async fn health(&self) -> Result<HealthStatus, OrsError> {
        self.client.get(ApiVersion::V1, "/health", &()).await
    }

    /// The most recent rate-limit snapshot observed on any response.
    pub fn last_rate_limit(&self) -> Option<RateLimitSnapshot> {
        self.client.rate_limit()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}
