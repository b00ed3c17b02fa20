//! Grinding-interval sweep
//!
//! Evaluates every grinding interval in a range at a fixed gauge-correction
//! interval, for one rail or for the whole track ground uniformly.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{LccParameters, MaintenanceStrategy, RailSpec, TrackSpec, TrackStrategy};
use crate::error::Result;
use crate::model::{CurveProvider, RailCurves};
use crate::simulation::{RunOptions, simulate_rail, simulate_track};

use super::config::IntervalRange;
use super::map_evaluations;
use super::result::{SweepPoint, SweepResult};

/// What a sweep simulates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SweepTarget {
    Rail(RailSpec),
    Track(TrackSpec),
}

/// Annuity, lifetime and total LCC for each grinding interval in `range`
pub fn sweep_grinding_intervals<P>(
    params: &LccParameters,
    provider: &P,
    target: &SweepTarget,
    gauge_correction_interval: u32,
    range: IntervalRange,
) -> Result<SweepResult>
where
    P: CurveProvider + ?Sized,
{
    range.validate("grinding_interval")?;
    let intervals: Vec<u32> = range.iter().collect();
    let life = f64::from(params.technical_life_years);

    let evaluations = match target {
        SweepTarget::Rail(rail) => {
            let curves = RailCurves::resolve(provider, rail)?;
            map_evaluations(&intervals, |&interval| {
                let strategy = MaintenanceStrategy::new(interval, gauge_correction_interval);
                simulate_rail(params, &curves, &strategy, RunOptions::default())
            })
        }
        SweepTarget::Track(track) => {
            let high = RailCurves::resolve(provider, &track.high())?;
            let low = RailCurves::resolve(provider, &track.low())?;
            map_evaluations(&intervals, |&interval| {
                let strategy = TrackStrategy::uniform(interval, gauge_correction_interval);
                simulate_track(params, &high, &low, &strategy, RunOptions::default())
            })
        }
    };

    let points = intervals
        .iter()
        .zip(evaluations)
        .map(|(&grinding_interval, outcome)| {
            outcome.map(|outcome| SweepPoint {
                grinding_interval,
                annuity: outcome.annuity,
                lifetime_years: outcome.lifetime_years,
                total_lcc: outcome.annuity * life,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = SweepResult {
        gauge_correction_interval,
        points,
    };
    if let Some(best) = result.optimum() {
        info!(
            gauge_correction_interval,
            grinding_interval = best.grinding_interval,
            annuity = best.annuity,
            lifetime = best.lifetime_years,
            "Sweep optimum"
        );
    }
    Ok(result)
}
