//! Sweep execution: one dispatch per parameter set, rayon-parallel across
//! sets.

use dispatch_core::fleet::{assign_nearest, spawn_fleet};
use dispatch_core::movement::{advance, GpsNoise, NoNoise, UniformGpsNoise};
use dispatch_core::scenario::Scenario;
use dispatch_core::status::DispatchStatus;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::metrics::RunResult;
use crate::parameters::ParameterSet;

/// Simulated tick cadence: one position update every 2 seconds.
pub const TICK_MS: u64 = 2000;

/// Liveness cap: a run that has not arrived by this many ticks is recorded
/// as unfinished instead of looping forever.
pub const MAX_TICKS: u64 = 5000;

/// Run one parameter set to completion (or the tick cap) and extract its
/// metrics.
pub fn run_single_dispatch(params: &ParameterSet) -> RunResult {
    let scenario = Scenario::default()
        .with_step_degrees(params.step_degrees)
        .with_average_speed_kmh(params.average_speed_kmh);

    let fleet = spawn_fleet(scenario.user, &scenario.fleet);
    let mut assignment = assign_nearest(scenario.user, &fleet, 0, &scenario.movement)
        .expect("default fleet is never empty");

    let initial_distance_km = assignment.distance_km;
    let initial_eta_minutes = assignment.eta_minutes;
    let ambulance_id = assignment.ambulance.id.clone();

    let mut noise: Box<dyn GpsNoise> = if params.noise_amplitude_degrees > 0.0 {
        Box::new(UniformGpsNoise::new(params.seed, params.noise_amplitude_degrees))
    } else {
        Box::new(NoNoise)
    };

    let mut now_ms = 0;
    let mut ticks = 0;
    while assignment.status != DispatchStatus::Arrived && ticks < MAX_TICKS {
        now_ms += TICK_MS;
        assignment = advance(
            assignment,
            scenario.user,
            now_ms,
            &scenario.movement,
            noise.as_mut(),
        );
        ticks += 1;
    }

    let arrived = assignment.status == DispatchStatus::Arrived;
    RunResult {
        run_id: params.run_id,
        seed: params.seed,
        ambulance_id,
        initial_distance_km,
        initial_eta_minutes,
        ticks_to_arrival: arrived.then_some(ticks),
        sim_time_to_arrival_ms: assignment.log.time_to_arrival(),
        time_to_en_route_ms: assignment.log.time_to_en_route(),
        final_distance_km: assignment.distance_km,
        transitions: assignment.log.entries().len(),
    }
}

/// Run every parameter set in parallel, preserving input order in the
/// results. Pass `show_progress = false` in tests.
pub fn run_parallel_sweep(parameter_sets: &[ParameterSet], show_progress: bool) -> Vec<RunResult> {
    let progress = if show_progress {
        let bar = ProgressBar::new(parameter_sets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} runs")
                .expect("valid progress template"),
        );
        Some(bar)
    } else {
        None
    };

    let results: Vec<RunResult> = parameter_sets
        .par_iter()
        .map(|params| {
            let result = run_single_dispatch(params);
            if let Some(bar) = &progress {
                bar.inc(1);
            }
            result
        })
        .collect();

    if let Some(bar) = progress {
        bar.finish();
    }
    results
}
