//! Result export: CSV and JSON tables of sweep results.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::metrics::{RunResult, SweepSummary};
use crate::parameters::ParameterSet;

/// Write one row per run, parameters and results side by side.
pub fn export_to_csv<P: AsRef<Path>>(
    path: P,
    results: &[RunResult],
    parameter_sets: &[ParameterSet],
) -> Result<(), Box<dyn std::error::Error>> {
    if results.len() != parameter_sets.len() {
        return Err(format!(
            "Results length ({}) doesn't match parameter_sets length ({})",
            results.len(),
            parameter_sets.len()
        )
        .into());
    }

    let mut wtr = csv::Writer::from_writer(File::create(path)?);
    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "step_degrees",
        "noise_amplitude_degrees",
        "average_speed_kmh",
        "ambulance_id",
        "initial_distance_km",
        "initial_eta_minutes",
        "ticks_to_arrival",
        "sim_time_to_arrival_ms",
        "time_to_en_route_ms",
        "final_distance_km",
        "transitions",
    ])?;

    for (result, params) in results.iter().zip(parameter_sets.iter()) {
        wtr.write_record([
            params.experiment_id.clone(),
            params.run_id.to_string(),
            params.seed.to_string(),
            params.step_degrees.to_string(),
            params.noise_amplitude_degrees.to_string(),
            params.average_speed_kmh.to_string(),
            result.ambulance_id.clone(),
            result.initial_distance_km.to_string(),
            result.initial_eta_minutes.to_string(),
            opt_to_string(result.ticks_to_arrival),
            opt_to_string(result.sim_time_to_arrival_ms),
            opt_to_string(result.time_to_en_route_ms),
            result.final_distance_km.to_string(),
            result.transitions.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn opt_to_string(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: SweepSummary,
    parameter_sets: &'a [ParameterSet],
    results: &'a [RunResult],
}

/// Write the whole sweep (summary + parameters + results) as one JSON
/// document.
pub fn export_to_json<P: AsRef<Path>>(
    path: P,
    results: &[RunResult],
    parameter_sets: &[ParameterSet],
) -> Result<(), Box<dyn std::error::Error>> {
    let report = JsonReport {
        summary: SweepSummary::from_results(results),
        parameter_sets,
        results,
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}
