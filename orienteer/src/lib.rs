//! Finds the least-cost route across a terrain map.
//!
//! The binary reads a terrain PNG, an elevation matrix and a route file,
//! runs one A* query, then writes the terrain image with the route painted
//! on it and a distance report.

pub mod cli;
pub mod config;
pub mod run;

pub use cli::Args;
pub use config::RunConfig;
pub use run::{AppError, RunSummary, run};
