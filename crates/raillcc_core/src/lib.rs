//! Rail life-cycle cost simulation library
//!
//! This crate estimates the life-cycle cost (LCC) and service life of the
//! rails on a track section under alternative maintenance regimes.
//! It supports:
//! - Monthly degradation of one or two rails (H-index wear, RCF build-up)
//!   driven by degradation curves interpolated over the track gauge
//! - Fixed-interval grinding and gauge correction, threshold-triggered
//!   milling and rail renewal
//! - Present-value cost ledgers per rail with shared possessions
//! - Renewal-option enumeration for two-rail tracks and minimum-annuity selection
//! - Grinding-interval sweeps, exhaustive strategy search and joint/separate comparison
//!
//! # Example
//!
//! ```ignore
//! use raillcc_core::{LccParameters, RunOptions, TrackSpec, TrackStrategy, simulate_track_with};
//!
//! let params = LccParameters::default();
//! let outcome = simulate_track_with(
//!     &params,
//!     &curve_store,
//!     &TrackSpec::default(),
//!     &TrackStrategy::uniform(6, 48),
//!     RunOptions::default().with_options(),
//! )?;
//! println!(
//!     "{}: {:.2}/m/year over {:.1} years",
//!     outcome.selected.label, outcome.annuity, outcome.lifetime_years
//! );
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod annuity;
pub mod costs;
pub mod degradation;
pub mod error;
pub mod interpolation;
pub mod maintenance;
pub mod optimization;
pub mod renewal;
pub mod simulation;
pub mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{LccParameters, MaintenanceStrategy, RailSpec, TrackSpec, TrackStrategy};
pub use error::{ConfigError, LookupError, SimulationError};
pub use model::{CurveProvider, CurveSet, CurveStore, LccOutcome, RailCurves, RailSide};
pub use renewal::RenewalOption;
pub use simulation::{
    RunOptions, simulate_rail, simulate_rail_with, simulate_track, simulate_track_with,
};
