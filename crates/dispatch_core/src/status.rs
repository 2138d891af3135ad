//! Dispatch status classification.
//!
//! Status is a pure function of current distance/ETA and the time elapsed
//! since assignment. It is never set directly by callers after the initial
//! `Dispatched` assignment; every later value comes out of [`classify`].

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a dispatched ambulance relative to its target.
///
/// Variant order is the progression order; `Ord` is derived so the
/// monotonicity guard in [`classify`] can compare stages directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DispatchStatus {
    Dispatched,
    EnRoute,
    Arriving,
    Arrived,
}

/// Threshold table for [`classify`].
///
/// These values are load-bearing: tests and the movement simulator both
/// depend on them, so they live in one place instead of being repeated at
/// each call site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// `Arrived` when ETA is at most this many minutes...
    pub arrived_eta_min: u32,
    /// ...or distance falls below this (km).
    pub arrived_distance_km: f64,
    /// `Arriving` when ETA is at most this many minutes...
    pub arriving_eta_min: u32,
    /// ...or distance falls below this (km).
    pub arriving_distance_km: f64,
    /// Hold `Dispatched` for this long after assignment, modeling dispatch
    /// latency, before the unit is reported `EnRoute`.
    pub settle_window_ms: u64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            arrived_eta_min: 1,
            arrived_distance_km: 0.1,
            arriving_eta_min: 3,
            arriving_distance_km: 0.5,
            settle_window_ms: 5000,
        }
    }
}

/// Derive the current status from distance, ETA, and elapsed time.
///
/// The returned status is never less advanced than `previous`: if the raw
/// threshold evaluation would regress (simulated GPS jitter momentarily
/// increasing distance), `previous` is returned unchanged. This keeps
/// status transitions monotonic for the lifetime of an assignment.
pub fn classify(
    distance_km: f64,
    eta_minutes: u32,
    previous: DispatchStatus,
    elapsed_since_assign_ms: u64,
    thresholds: &StatusThresholds,
) -> DispatchStatus {
    let raw = if eta_minutes <= thresholds.arrived_eta_min
        || distance_km < thresholds.arrived_distance_km
    {
        DispatchStatus::Arrived
    } else if eta_minutes <= thresholds.arriving_eta_min
        || distance_km < thresholds.arriving_distance_km
    {
        DispatchStatus::Arriving
    } else if elapsed_since_assign_ms > thresholds.settle_window_ms {
        DispatchStatus::EnRoute
    } else {
        DispatchStatus::Dispatched
    };
    raw.max(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DispatchStatus::*;

    fn thresholds() -> StatusThresholds {
        StatusThresholds::default()
    }

    #[test]
    fn status_ordering_matches_progression() {
        assert!(Dispatched < EnRoute);
        assert!(EnRoute < Arriving);
        assert!(Arriving < Arrived);
    }

    #[test]
    fn holds_dispatched_during_settle_window() {
        let status = classify(8.0, 16, Dispatched, 3000, &thresholds());
        assert_eq!(status, Dispatched);
    }

    #[test]
    fn promotes_to_en_route_after_settle_window() {
        let status = classify(8.0, 16, Dispatched, 5001, &thresholds());
        assert_eq!(status, EnRoute);
    }

    #[test]
    fn arriving_on_eta_or_distance() {
        assert_eq!(classify(1.2, 3, EnRoute, 60_000, &thresholds()), Arriving);
        assert_eq!(classify(0.4, 5, EnRoute, 60_000, &thresholds()), Arriving);
    }

    #[test]
    fn arrived_on_eta_or_distance() {
        assert_eq!(classify(0.6, 1, Arriving, 60_000, &thresholds()), Arrived);
        assert_eq!(classify(0.05, 9, Arriving, 60_000, &thresholds()), Arrived);
    }

    #[test]
    fn never_regresses_below_previous() {
        // Distance jumped back up after the unit was already Arriving.
        let status = classify(6.0, 12, Arriving, 60_000, &thresholds());
        assert_eq!(status, Arriving);
        // Arrived is terminal even if the raw evaluation disagrees.
        let status = classify(6.0, 12, Arrived, 60_000, &thresholds());
        assert_eq!(status, Arrived);
    }

    #[test]
    fn monotonic_over_noisy_shrinking_trend() {
        // 50 ticks of distance shrinking from 6 km toward 0 with ±0.4 km
        // jitter layered on top. The reported sequence must never step back.
        let mut previous = Dispatched;
        let mut last_seen = Dispatched;
        for tick in 0u64..50 {
            let trend = 6.0 - (tick as f64) * 0.13;
            let jitter = if tick % 2 == 0 { 0.4 } else { -0.4 };
            let distance = (trend + jitter).max(0.0);
            let eta = ((distance / 30.0) * 60.0).round() as u32;
            let status = classify(distance, eta, previous, tick * 2000, &thresholds());
            assert!(status >= last_seen, "regressed at tick {tick}: {status:?} < {last_seen:?}");
            last_seen = status;
            previous = status;
        }
        assert_eq!(last_seen, Arrived);
    }
}
