//! Scenario bundles: everything one simulated dispatch needs in a single
//! value with sensible defaults.
//!
//! All tunables are plain struct fields, not environment variables; the
//! default scenario is the Hyderabad reference setup used throughout the
//! tests and the experiments runner.

use serde::{Deserialize, Serialize};

use crate::fleet::{DriftConfig, FleetConfig};
use crate::geo::GeoPoint;
use crate::movement::MovementConfig;

/// City-centre reference point for the default scenario (Hyderabad).
pub const DEFAULT_USER_LAT: f64 = 17.385044;
pub const DEFAULT_USER_LNG: f64 = 78.486671;

/// One dispatch scenario: user location, fleet composition, and all
/// simulator tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub user: GeoPoint,
    pub fleet: FleetConfig,
    pub movement: MovementConfig,
    pub drift: DriftConfig,
    /// Radius for the hospital directory query (km).
    pub max_hospital_distance_km: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            user: GeoPoint::new(DEFAULT_USER_LAT, DEFAULT_USER_LNG),
            fleet: FleetConfig::default(),
            movement: MovementConfig::default(),
            drift: DriftConfig::default(),
            max_hospital_distance_km: crate::directory::DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

impl Scenario {
    pub fn with_user(mut self, user: GeoPoint) -> Self {
        self.user = user;
        self
    }

    pub fn with_step_degrees(mut self, step_degrees: f64) -> Self {
        self.movement.step_degrees = step_degrees;
        self
    }

    pub fn with_average_speed_kmh(mut self, average_speed_kmh: f64) -> Self {
        self.movement.average_speed_kmh = average_speed_kmh;
        self
    }

    pub fn with_drift_seed(mut self, seed: u64) -> Self {
        self.drift.seed = seed;
        self
    }
}
