//! Hospital acknowledgment simulation.
//!
//! When an SOS goes out, the top-ranked hospitals "respond" on a fixed
//! timetable. The timetable is a pure function of elapsed time since the
//! SOS, so a board snapshot can be recomputed at any instant without timers
//! or mutable state, and the resulting status sequence is monotonic by
//! construction.

use serde::{Deserialize, Serialize};

use crate::directory::Hospital;
use crate::ranking::Ranked;

/// Hospital-side response stage. Variant order is the progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AckStatus {
    Pending,
    Acknowledged,
    Dispatching,
    EnRoute,
}

/// Response timetable. Hospital `i` acknowledges at
/// `ack_base_ms + i * ack_stagger_ms`; only the nearest hospital goes on to
/// dispatch and send a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AckConfig {
    pub ack_base_ms: u64,
    pub ack_stagger_ms: u64,
    /// Nearest hospital only: when it starts dispatching.
    pub dispatch_at_ms: u64,
    /// Nearest hospital only: when its unit is en route.
    pub en_route_at_ms: u64,
    /// ETA reported once the unit is en route (minutes).
    pub en_route_eta_min: u32,
    /// How many ranked hospitals are put on the board.
    pub board_size: usize,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            ack_base_ms: 2000,
            ack_stagger_ms: 1500,
            dispatch_at_ms: 5000,
            en_route_at_ms: 8000,
            en_route_eta_min: 8,
            board_size: 3,
        }
    }
}

/// Response stage of the hospital at `index` (0 = nearest) after
/// `elapsed_ms` since the SOS.
pub fn ack_status_at(index: usize, elapsed_ms: u64, config: &AckConfig) -> AckStatus {
    if index == 0 {
        if elapsed_ms >= config.en_route_at_ms {
            return AckStatus::EnRoute;
        }
        if elapsed_ms >= config.dispatch_at_ms {
            return AckStatus::Dispatching;
        }
    }
    let ack_at = config.ack_base_ms + index as u64 * config.ack_stagger_ms;
    if elapsed_ms >= ack_at {
        AckStatus::Acknowledged
    } else {
        AckStatus::Pending
    }
}

/// One row of the response board at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct AckEntry {
    pub hospital: Hospital,
    pub status: AckStatus,
    /// Reported ETA, present only once the unit is en route.
    pub eta_minutes: Option<u32>,
    /// When the current status began (ms since the SOS).
    pub since_ms: u64,
}

/// The response board: the top-ranked hospitals for an SOS, snapshotted at
/// any elapsed time.
#[derive(Debug, Clone)]
pub struct AckBoard {
    hospitals: Vec<Hospital>,
    config: AckConfig,
}

impl AckBoard {
    /// Build a board from a ranked hospital list (nearest first); only the
    /// first `board_size` entries participate.
    pub fn new(ranked: &[Ranked<Hospital>], config: AckConfig) -> Self {
        let hospitals = ranked
            .iter()
            .take(config.board_size)
            .map(|r| r.entity.clone())
            .collect();
        Self { hospitals, config }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Board state `elapsed_ms` after the SOS went out.
    pub fn snapshot(&self, elapsed_ms: u64) -> Vec<AckEntry> {
        self.hospitals
            .iter()
            .enumerate()
            .map(|(index, hospital)| {
                let status = ack_status_at(index, elapsed_ms, &self.config);
                AckEntry {
                    hospital: hospital.clone(),
                    status,
                    eta_minutes: (status == AckStatus::EnRoute)
                        .then_some(self.config.en_route_eta_min),
                    since_ms: self.status_began_at(index, status),
                }
            })
            .collect()
    }

    fn status_began_at(&self, index: usize, status: AckStatus) -> u64 {
        match status {
            AckStatus::Pending => 0,
            AckStatus::Acknowledged => {
                self.config.ack_base_ms + index as u64 * self.config.ack_stagger_ms
            }
            AckStatus::Dispatching => self.config.dispatch_at_ms,
            AckStatus::EnRoute => self.config.en_route_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{hyderabad_directory, nearby_hospitals};
    use crate::test_helpers::city_centre;
    use AckStatus::*;

    fn board() -> AckBoard {
        let hospitals = hyderabad_directory();
        let ranked = nearby_hospitals(city_centre(), &hospitals, None);
        AckBoard::new(&ranked, AckConfig::default())
    }

    #[test]
    fn everyone_starts_pending() {
        let entries = board().snapshot(0);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.status == Pending));
        assert!(entries.iter().all(|e| e.eta_minutes.is_none()));
    }

    #[test]
    fn acknowledgments_stagger_by_rank() {
        let b = board();
        let at_2s = b.snapshot(2000);
        assert_eq!(at_2s[0].status, Acknowledged);
        assert_eq!(at_2s[1].status, Pending);
        let at_3_5s = b.snapshot(3500);
        assert_eq!(at_3_5s[1].status, Acknowledged);
        assert_eq!(at_3_5s[2].status, Pending);
        let at_5s = b.snapshot(5000);
        assert_eq!(at_5s[2].status, Acknowledged);
    }

    #[test]
    fn only_the_nearest_hospital_dispatches() {
        let b = board();
        let at_5s = b.snapshot(5000);
        assert_eq!(at_5s[0].status, Dispatching);
        let at_8s = b.snapshot(8000);
        assert_eq!(at_8s[0].status, EnRoute);
        assert_eq!(at_8s[0].eta_minutes, Some(8));
        assert_eq!(at_8s[0].since_ms, 8000);
        assert!(at_8s[1..].iter().all(|e| e.status == Acknowledged));
    }

    #[test]
    fn status_is_monotonic_in_elapsed_time() {
        for index in 0..3 {
            let mut last = Pending;
            for elapsed in (0..12_000).step_by(250) {
                let status = ack_status_at(index, elapsed, &AckConfig::default());
                assert!(status >= last, "hospital {index} regressed at {elapsed} ms");
                last = status;
            }
        }
    }
}
