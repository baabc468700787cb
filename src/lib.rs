//! Core library for the revenue-estimator project.
//!
//! Loads a niche-to-rate-range table (external JSON document with a
//! built-in fallback), normalizes loose rate specifications, and computes
//! CPM/RPM revenue estimates for a monthly view count.

pub mod config;
pub mod errors;
pub mod estimator;
pub mod loader;
pub mod models;
pub mod rates;
pub mod utils;
