//! Maintenance triggers
//!
//! Grinding and gauge correction run on fixed intervals with their own
//! counters; milling and renewal are threshold triggers on the rail state.

use crate::config::LccParameters;
use crate::simulation_state::{RailState, TrackState};

pub fn grinding_due(rail: &RailState, grinding_interval: u32) -> bool {
    rail.months_since_grinding == grinding_interval
}

/// Gauge correction for the whole track. Returns `true` when it ran this month.
pub fn apply_tamping(track: &mut TrackState, interval: u32, params: &LccParameters) -> bool {
    if track.months_since_tamping == interval {
        track.gauge = params.initial_gauge;
        track.months_since_tamping = 1;
        true
    } else {
        track.months_since_tamping += 1;
        false
    }
}

pub fn milling_due(rail: &RailState, params: &LccParameters) -> bool {
    rail.rcf_residual >= params.rcf_threshold
}

pub fn renewal_due(rail: &RailState, params: &LccParameters) -> bool {
    rail.index >= params.index_threshold
}
