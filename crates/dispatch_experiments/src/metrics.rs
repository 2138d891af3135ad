//! Per-run results and sweep-level summary statistics.

use serde::Serialize;

/// Outcome of one simulated dispatch run to completion.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub run_id: usize,
    pub seed: u64,
    /// Unit that was assigned (nearest at dispatch time).
    pub ambulance_id: String,
    pub initial_distance_km: f64,
    pub initial_eta_minutes: u32,
    /// Ticks until `Arrived`; `None` when the tick cap was hit first.
    pub ticks_to_arrival: Option<u64>,
    /// Simulated time until `Arrived` in ms.
    pub sim_time_to_arrival_ms: Option<u64>,
    /// Simulated time until the unit left the settle window.
    pub time_to_en_route_ms: Option<u64>,
    pub final_distance_km: f64,
    /// Number of recorded status transitions (including the initial one).
    pub transitions: usize,
}

impl RunResult {
    pub fn arrived(&self) -> bool {
        self.ticks_to_arrival.is_some()
    }
}

/// Aggregates over a whole sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub total_runs: usize,
    pub arrived_runs: usize,
    pub avg_ticks_to_arrival: f64,
    pub median_ticks_to_arrival: f64,
    pub p90_ticks_to_arrival: f64,
}

impl SweepSummary {
    pub fn from_results(results: &[RunResult]) -> Self {
        let ticks: Vec<u64> = results.iter().filter_map(|r| r.ticks_to_arrival).collect();
        let (avg, median, p90) = calculate_stats(&ticks);
        Self {
            total_runs: results.len(),
            arrived_runs: ticks.len(),
            avg_ticks_to_arrival: avg,
            median_ticks_to_arrival: median,
            p90_ticks_to_arrival: p90,
        }
    }
}

/// (average, median, p90) of a sample; zeros for an empty sample.
fn calculate_stats(values: &[u64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let mut sorted = values.to_vec();
    sorted.sort();

    let avg = sorted.iter().sum::<u64>() as f64 / sorted.len() as f64;
    let median = if sorted.len() % 2 == 0 {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) as f64 / 2.0
    } else {
        sorted[sorted.len() / 2] as f64
    };
    let p90_idx = ((sorted.len() - 1) as f64 * 0.9) as usize;
    let p90 = sorted[p90_idx.min(sorted.len() - 1)] as f64;
    (avg, median, p90)
}
