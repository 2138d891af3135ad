//! Sweep driver: runs the default dispatch parameter grid and writes result
//! tables.
//!
//! Usage: `dispatch_experiments [output_dir]` (default `results/`).

use std::path::PathBuf;

use dispatch_experiments::{
    export_to_csv, export_to_json, run_parallel_sweep, ParameterSpace, SweepSummary,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "results".to_string())
        .into();
    std::fs::create_dir_all(&output_dir)?;

    let parameter_sets = ParameterSpace::grid("dispatch-sweep")
        .seeds(vec![0, 1, 2, 3, 4])
        .step_degrees(vec![0.0005, 0.001, 0.002])
        .noise_amplitudes(vec![0.0, 0.0002, 0.0004])
        .average_speeds(vec![20.0, 30.0, 40.0])
        .generate();
    println!("Running {} dispatch simulations...", parameter_sets.len());

    let results = run_parallel_sweep(&parameter_sets, true);

    let summary = SweepSummary::from_results(&results);
    println!(
        "Arrived: {}/{} | ticks to arrival avg {:.1}, median {:.1}, p90 {:.1}",
        summary.arrived_runs,
        summary.total_runs,
        summary.avg_ticks_to_arrival,
        summary.median_ticks_to_arrival,
        summary.p90_ticks_to_arrival,
    );

    let csv_path = output_dir.join("results.csv");
    let json_path = output_dir.join("results.json");
    export_to_csv(&csv_path, &results, &parameter_sets)?;
    export_to_json(&json_path, &results, &parameter_sets)?;
    println!("Wrote {} and {}", csv_path.display(), json_path.display());

    Ok(())
}
