//! Parameter variation: grid search over simulator tunables.

use serde::Serialize;

/// One concrete parameter combination for a single dispatch run.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSet {
    pub experiment_id: String,
    pub run_id: usize,
    /// Seed for GPS noise and fleet drift.
    pub seed: u64,
    /// Per-tick movement in degrees.
    pub step_degrees: f64,
    /// GPS noise amplitude in degrees (0 = deterministic run).
    pub noise_amplitude_degrees: f64,
    /// Assumed average speed for ETA derivation (km/h).
    pub average_speed_kmh: f64,
}

/// Grid of parameter values; [`generate`](Self::generate) yields the full
/// cartesian product in a deterministic order.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    experiment_id: String,
    seeds: Vec<u64>,
    step_degrees: Vec<f64>,
    noise_amplitudes: Vec<f64>,
    average_speeds: Vec<f64>,
}

impl ParameterSpace {
    pub fn grid(experiment_id: &str) -> Self {
        Self {
            experiment_id: experiment_id.to_string(),
            seeds: vec![0],
            step_degrees: vec![0.001],
            noise_amplitudes: vec![0.0],
            average_speeds: vec![30.0],
        }
    }

    pub fn seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn step_degrees(mut self, values: Vec<f64>) -> Self {
        self.step_degrees = values;
        self
    }

    pub fn noise_amplitudes(mut self, values: Vec<f64>) -> Self {
        self.noise_amplitudes = values;
        self
    }

    pub fn average_speeds(mut self, values: Vec<f64>) -> Self {
        self.average_speeds = values;
        self
    }

    /// All combinations, run ids assigned in generation order.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let mut sets = Vec::new();
        for &seed in &self.seeds {
            for &step in &self.step_degrees {
                for &noise in &self.noise_amplitudes {
                    for &speed in &self.average_speeds {
                        sets.push(ParameterSet {
                            experiment_id: self.experiment_id.clone(),
                            run_id: sets.len(),
                            seed,
                            step_degrees: step,
                            noise_amplitude_degrees: noise,
                            average_speed_kmh: speed,
                        });
                    }
                }
            }
        }
        sets
    }
}
