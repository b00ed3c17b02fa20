//! Maintenance strategy optimization
//!
//! Sweeps, exhaustive searches and comparisons over maintenance strategies.
//! Every simulation is independent and only reads the curve data, so the
//! evaluations run in parallel when the `parallel` feature is enabled.
//!
//! # Example
//!
//! ```ignore
//! use raillcc_core::optimization::{IntervalRange, SweepTarget, sweep_grinding_intervals};
//!
//! let sweep = sweep_grinding_intervals(
//!     &params,
//!     &store,
//!     &SweepTarget::Track(track),
//!     48,
//!     IntervalRange::default(),
//! )?;
//! if let Some(best) = sweep.optimum() {
//!     println!("Grind every {} months: {:.2}/m/year", best.grinding_interval, best.annuity);
//! }
//! ```

mod comparison;
mod config;
mod grid_search;
mod result;
mod sweep;

pub use comparison::compare_joint_vs_separate;
pub use config::{IntervalRange, StrategySpace};
pub use grid_search::optimize_strategy;
pub use result::{ComparisonRow, EvaluationRecord, OptimizationResult, SweepPoint, SweepResult};
pub use sweep::{SweepTarget, sweep_grinding_intervals};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `f` for every item, in parallel when enabled. Output order matches input.
#[cfg(feature = "parallel")]
fn map_evaluations<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_evaluations<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(f).collect()
}
