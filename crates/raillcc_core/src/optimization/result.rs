//! Optimization result types

use serde::{Deserialize, Serialize};

use crate::annuity::select_minimum;
use crate::config::TrackStrategy;

/// One evaluated point of a grinding-interval sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub grinding_interval: u32,
    pub annuity: f64,
    pub lifetime_years: f64,
    /// Annuity carried over the technical life (currency per metre)
    pub total_lcc: f64,
}

/// Annuity, lifetime and total LCC per grinding interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub gauge_correction_interval: u32,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Minimum-annuity point; the shortest interval wins ties
    pub fn optimum(&self) -> Option<&SweepPoint> {
        select_minimum(&self.points, |p| p.annuity)
    }
}

/// A single strategy evaluated during optimization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub strategy: TrackStrategy,
    pub annuity: f64,
    pub lifetime_years: f64,
}

/// Result of an exhaustive strategy search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Minimum-annuity strategy
    pub best: EvaluationRecord,
    /// Every evaluation, in search order
    pub evaluations: Vec<EvaluationRecord>,
}

impl OptimizationResult {
    #[must_use]
    pub fn num_evaluations(&self) -> usize {
        self.evaluations.len()
    }
}

/// Joint (two-rail) against separate (single-rail) results for one grinding interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub grinding_interval: u32,
    pub joint_annuity: f64,
    pub joint_lifetime_years: f64,
    /// Joint annuity over the technical life plus the track renewal per metre
    pub joint_total_lcc: f64,
    pub high_annuity: f64,
    pub high_lifetime_years: f64,
    pub high_total_lcc: f64,
    pub low_annuity: f64,
    pub low_lifetime_years: f64,
    pub low_total_lcc: f64,
    /// Both single-rail totals plus the track renewal per metre
    pub separate_total_lcc: f64,
}
