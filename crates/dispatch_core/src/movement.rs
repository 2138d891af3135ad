//! Movement simulator: advances a dispatched ambulance toward its target.
//!
//! One call to [`advance`] is one tick. The step direction is the flat-plane
//! lat/lng vector toward the target (a documented simplification, not
//! geodesic-accurate, fine at the distances involved); distance is then
//! recomputed from scratch via haversine so error never accumulates. The
//! simulator owns no timer and no shared state: the caller holds the
//! [`TrackedAssignment`] value and decides the tick cadence, so concurrent
//! assignments need no synchronization at all.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::fleet::Ambulance;
use crate::geo::{distance_km, GeoPoint};
use crate::history::TransitionLog;
use crate::status::{classify, DispatchStatus, StatusThresholds};

/// Tunables for the movement simulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Per-tick movement toward the target, in degrees (~100 m at 0.001).
    pub step_degrees: f64,
    /// Assumed average road speed for ETA derivation (km/h).
    pub average_speed_kmh: f64,
    pub thresholds: StatusThresholds,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step_degrees: 0.001,
            average_speed_kmh: 30.0,
            thresholds: StatusThresholds::default(),
        }
    }
}

/// Simulated GPS noise, injected into [`advance`] rather than baked in so
/// deterministic runs stay deterministic.
pub trait GpsNoise: Send + std::fmt::Debug {
    /// Per-tick (lat, lng) perturbation in degrees.
    fn sample(&mut self) -> (f64, f64);
}

/// No perturbation: pure direct-line movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl GpsNoise for NoNoise {
    fn sample(&mut self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Uniform jitter in ±`amplitude_degrees`, seeded for reproducibility.
#[derive(Debug)]
pub struct UniformGpsNoise {
    rng: StdRng,
    amplitude_degrees: f64,
}

impl UniformGpsNoise {
    pub fn new(seed: u64, amplitude_degrees: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amplitude_degrees,
        }
    }
}

impl GpsNoise for UniformGpsNoise {
    fn sample(&mut self) -> (f64, f64) {
        let a = self.amplitude_degrees;
        if a <= 0.0 {
            return (0.0, 0.0);
        }
        (self.rng.gen_range(-a..=a), self.rng.gen_range(-a..=a))
    }
}

/// One ambulance bound to one target for the duration of an active dispatch.
///
/// The only time-evolving state in the crate: created by
/// [`crate::fleet::assign_nearest`], advanced by [`advance`], discarded when
/// the caller stops ticking or the unit reaches `Arrived`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedAssignment {
    pub ambulance: Ambulance,
    /// Current simulated position; a fresh `GeoPoint` every tick.
    pub position: GeoPoint,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub status: DispatchStatus,
    pub assigned_at_ms: u64,
    pub log: TransitionLog,
}

impl TrackedAssignment {
    /// Bind `ambulance` to a dispatch starting now. Distance and ETA are
    /// derived from the ambulance's position relative to `target`; status
    /// starts at `Dispatched`, the only status a caller ever sets.
    pub fn assign(ambulance: Ambulance, target: GeoPoint, now_ms: u64, config: &MovementConfig) -> Self {
        let position = ambulance.location;
        let distance = distance_km(position, target);
        let mut log = TransitionLog::new();
        log.record(now_ms, DispatchStatus::Dispatched);
        Self {
            ambulance,
            position,
            distance_km: distance,
            eta_minutes: eta_minutes(distance, config.average_speed_kmh),
            status: DispatchStatus::Dispatched,
            assigned_at_ms: now_ms,
            log,
        }
    }
}

/// ETA in whole minutes at the given average speed, clamped at 0.
pub fn eta_minutes(distance_km: f64, average_speed_kmh: f64) -> u32 {
    let speed = average_speed_kmh.max(1.0);
    ((distance_km / speed) * 60.0).round().max(0.0) as u32
}

/// Advance `assignment` one tick toward `target` and return the updated
/// value.
///
/// Per tick: move `step_degrees` along the direct-line vector (clamped so
/// the unit never overshoots the target), apply the injected noise,
/// recompute distance and ETA from the new position, and reclassify status
/// with the monotonicity guard. If the current position already coincides
/// with the target the function short-circuits to distance 0 / ETA 0 /
/// `Arrived`: no division by zero, and a fixed point for further ticks.
pub fn advance(
    mut assignment: TrackedAssignment,
    target: GeoPoint,
    now_ms: u64,
    config: &MovementConfig,
    noise: &mut dyn GpsNoise,
) -> TrackedAssignment {
    let dx = target.lat - assignment.position.lat;
    let dy = target.lng - assignment.position.lng;
    let remaining = (dx * dx + dy * dy).sqrt();

    if remaining == 0.0 {
        assignment.distance_km = 0.0;
        assignment.eta_minutes = 0;
        assignment.status = DispatchStatus::Arrived;
        assignment.log.record(now_ms, DispatchStatus::Arrived);
        return assignment;
    }

    let move_ratio = (config.step_degrees / remaining).min(1.0);
    // Clamped steps land exactly on the target: `p + (t - p)` is not
    // guaranteed to equal `t` in floating point.
    let (base_lat, base_lng) = if move_ratio >= 1.0 {
        (target.lat, target.lng)
    } else {
        (
            assignment.position.lat + dx * move_ratio,
            assignment.position.lng + dy * move_ratio,
        )
    };
    let (noise_lat, noise_lng) = noise.sample();
    let position = GeoPoint::captured_at(base_lat + noise_lat, base_lng + noise_lng, now_ms);

    let distance = distance_km(position, target);
    let eta = eta_minutes(distance, config.average_speed_kmh);
    let elapsed = now_ms.saturating_sub(assignment.assigned_at_ms);
    let status = classify(distance, eta, assignment.status, elapsed, &config.thresholds);

    assignment.position = position;
    assignment.distance_km = distance;
    assignment.eta_minutes = eta;
    assignment.status = status;
    assignment.log.record(now_ms, status);
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{city_centre, test_ambulance};

    const TICK_MS: u64 = 2000;

    #[test]
    fn assignment_derives_initial_distance_and_eta() {
        let target = city_centre();
        // ~1 km north of the target.
        let amb = test_ambulance("AMB-100", target.lat + 0.009, target.lng);
        let assignment = TrackedAssignment::assign(amb, target, 0, &MovementConfig::default());
        assert!((assignment.distance_km - 1.0).abs() < 0.05);
        assert_eq!(assignment.eta_minutes, 2);
        assert_eq!(assignment.status, DispatchStatus::Dispatched);
    }

    #[test]
    fn zero_distance_short_circuits_to_arrived() {
        let target = city_centre();
        let amb = test_ambulance("AMB-100", target.lat, target.lng);
        let assignment = TrackedAssignment::assign(amb, target, 0, &MovementConfig::default());
        let stepped = advance(assignment, target, TICK_MS, &MovementConfig::default(), &mut NoNoise);
        assert_eq!(stepped.distance_km, 0.0);
        assert_eq!(stepped.eta_minutes, 0);
        assert_eq!(stepped.status, DispatchStatus::Arrived);
    }

    #[test]
    fn converges_from_five_km_within_bounded_ticks() {
        let config = MovementConfig::default();
        let target = city_centre();
        // ~5 km away on a diagonal.
        let amb = test_ambulance("AMB-100", target.lat + 0.032, target.lng - 0.032);
        let mut assignment = TrackedAssignment::assign(amb, target, 0, &config);
        assert!((assignment.distance_km - 5.0).abs() < 0.3);

        let mut now_ms = 0;
        let mut ticks = 0u32;
        while assignment.distance_km >= 0.1 {
            now_ms += TICK_MS;
            assignment = advance(assignment, target, now_ms, &config, &mut NoNoise);
            ticks += 1;
            assert!(ticks <= 2000, "did not converge within 2000 ticks");
        }
        assert_eq!(assignment.status, DispatchStatus::Arrived);

        // Idempotent at the fixed point: once landed, further ticks change
        // nothing.
        for _ in 0..5 {
            now_ms += TICK_MS;
            assignment = advance(assignment, target, now_ms, &config, &mut NoNoise);
            assert_eq!(assignment.distance_km, 0.0);
            assert_eq!(assignment.status, DispatchStatus::Arrived);
        }
    }

    #[test]
    fn never_overshoots_the_target() {
        let config = MovementConfig::default();
        let target = city_centre();
        // Closer than one step: the clamp must land exactly on the target.
        let amb = test_ambulance("AMB-100", target.lat + 0.0004, target.lng);
        let assignment = TrackedAssignment::assign(amb, target, 0, &config);
        let stepped = advance(assignment, target, TICK_MS, &config, &mut NoNoise);
        assert_eq!(stepped.position.lat, target.lat);
        assert_eq!(stepped.position.lng, target.lng);
        assert_eq!(stepped.distance_km, 0.0);
    }

    #[test]
    fn eta_shrinks_as_the_unit_closes_in() {
        let config = MovementConfig::default();
        let target = city_centre();
        let amb = test_ambulance("AMB-100", target.lat + 0.03, target.lng);
        let mut assignment = TrackedAssignment::assign(amb, target, 0, &config);
        let mut last_eta = assignment.eta_minutes;
        for tick in 1..=40u64 {
            assignment = advance(assignment, target, tick * TICK_MS, &config, &mut NoNoise);
            assert!(assignment.eta_minutes <= last_eta, "eta rose at tick {tick}");
            last_eta = assignment.eta_minutes;
        }
    }

    #[test]
    fn status_stays_monotonic_under_noise() {
        let config = MovementConfig::default();
        let target = city_centre();
        let amb = test_ambulance("AMB-100", target.lat + 0.02, target.lng + 0.02);
        let mut assignment = TrackedAssignment::assign(amb, target, 0, &config);
        let mut noise = UniformGpsNoise::new(7, 0.0008);
        let mut last = assignment.status;
        for tick in 1..=50u64 {
            assignment = advance(assignment, target, tick * TICK_MS, &config, &mut noise);
            assert!(assignment.status >= last, "status regressed at tick {tick}");
            last = assignment.status;
        }
    }

    #[test]
    fn log_records_each_stage_once() {
        let config = MovementConfig::default();
        let target = city_centre();
        let amb = test_ambulance("AMB-100", target.lat + 0.032, target.lng);
        let mut assignment = TrackedAssignment::assign(amb, target, 0, &config);
        let mut now_ms = 0;
        while assignment.status != DispatchStatus::Arrived {
            now_ms += TICK_MS;
            assignment = advance(assignment, target, now_ms, &config, &mut NoNoise);
        }
        let statuses: Vec<_> = assignment.log.entries().iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            [
                DispatchStatus::Dispatched,
                DispatchStatus::EnRoute,
                DispatchStatus::Arriving,
                DispatchStatus::Arrived,
            ]
        );
    }
}
