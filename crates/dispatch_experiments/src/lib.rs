//! Batch experimentation for the proximity dispatch simulator.
//!
//! Runs many simulated dispatches across a grid of parameters (seeds, step
//! sizes, noise amplitudes, average speeds), extracts per-run metrics, and
//! exports result tables for analysis.
//!
//! - [`parameters`]: parameter grid generation
//! - [`runner`]: single-run and rayon-parallel sweep execution
//! - [`metrics`]: per-run results and sweep summary statistics
//! - [`export`]: CSV/JSON result tables

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use export::{export_to_csv, export_to_json};
pub use metrics::{RunResult, SweepSummary};
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_sweep, run_single_dispatch};
