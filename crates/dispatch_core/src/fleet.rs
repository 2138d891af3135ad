//! Simulated ambulance fleet: spawning, nearest-unit assignment, idle drift.
//!
//! The fleet is spawned at fixed offsets around the caller's location, one
//! unit per configured driver. Assignment ranks the fleet by haversine
//! distance and binds the nearest unit as a fresh [`TrackedAssignment`];
//! unassigned units drift randomly so a rendered fleet does not look frozen.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::movement::{MovementConfig, TrackedAssignment};
use crate::ranking::{rank_by_distance, Located};

/// One ambulance of the simulated fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ambulance {
    pub id: String,
    pub driver_name: String,
    pub vehicle_number: String,
    pub phone: String,
    pub location: GeoPoint,
}

impl Located for Ambulance {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// Driver attributes attached to a spawned unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub name: String,
    pub vehicle_number: String,
    pub phone: String,
}

impl DriverProfile {
    fn new(name: &str, vehicle_number: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            vehicle_number: vehicle_number.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// Fleet composition: drivers and their spawn offsets from the caller's
/// location, paired index-wise. The defaults are the reference four-unit
/// fleet scattered within ~2.5 km.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    pub drivers: Vec<DriverProfile>,
    /// (lat, lng) spawn offsets in degrees, one per driver.
    pub spawn_offsets_deg: Vec<(f64, f64)>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            drivers: vec![
                DriverProfile::new("Raju Kumar", "AP-31-TG-9234", "9876543210"),
                DriverProfile::new("Suresh Reddy", "TS-08-AB-1234", "9876543211"),
                DriverProfile::new("Venkat Rao", "AP-28-CD-5678", "9876543212"),
                DriverProfile::new("Krishna Murthy", "TS-09-EF-9012", "9876543213"),
            ],
            spawn_offsets_deg: vec![
                (0.015, 0.012),
                (-0.018, 0.008),
                (0.022, -0.015),
                (-0.01, -0.02),
            ],
        }
    }
}

/// Spawn one ambulance per configured driver around `user`. Unit ids are
/// `AMB-100`, `AMB-101`, ... in driver order.
pub fn spawn_fleet(user: GeoPoint, config: &FleetConfig) -> Vec<Ambulance> {
    config
        .drivers
        .iter()
        .zip(config.spawn_offsets_deg.iter())
        .enumerate()
        .map(|(i, (driver, (dlat, dlng)))| Ambulance {
            id: format!("AMB-{}", 100 + i),
            driver_name: driver.name.clone(),
            vehicle_number: driver.vehicle_number.clone(),
            phone: driver.phone.clone(),
            location: GeoPoint::new(user.lat + dlat, user.lng + dlng),
        })
        .collect()
}

/// Rank the fleet by distance from `user` and bind the nearest unit as a new
/// assignment. `None` when the fleet is empty.
pub fn assign_nearest(
    user: GeoPoint,
    fleet: &[Ambulance],
    now_ms: u64,
    config: &MovementConfig,
) -> Option<TrackedAssignment> {
    let ranked = rank_by_distance(user, fleet, None);
    let nearest = ranked.into_iter().next()?;
    Some(TrackedAssignment::assign(nearest.entity, user, now_ms, config))
}

/// Random walk applied to unassigned units between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Per-tick jitter bound in degrees (± this value on each axis).
    pub amplitude_degrees: f64,
    pub seed: u64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            amplitude_degrees: 0.0005,
            seed: 0,
        }
    }
}

/// Seeded drift state. Construct once per simulation and feed it the fleet
/// each tick; the assigned unit (tracked separately) is skipped.
#[derive(Debug)]
pub struct FleetDrift {
    rng: StdRng,
    amplitude_degrees: f64,
}

impl FleetDrift {
    pub fn new(config: &DriftConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            amplitude_degrees: config.amplitude_degrees,
        }
    }

    /// Return the fleet with every unit except `skip_id` jittered in place.
    pub fn apply(&mut self, fleet: &[Ambulance], skip_id: Option<&str>) -> Vec<Ambulance> {
        fleet
            .iter()
            .map(|amb| {
                if skip_id == Some(amb.id.as_str()) {
                    return amb.clone();
                }
                let a = self.amplitude_degrees;
                let mut moved = amb.clone();
                moved.location = GeoPoint::new(
                    amb.location.lat + self.rng.gen_range(-a..=a),
                    amb.location.lng + self.rng.gen_range(-a..=a),
                );
                moved
            })
            .collect()
    }
}
