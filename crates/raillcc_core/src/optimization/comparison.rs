//! Joint against separate maintenance
//!
//! For each grinding interval the two-rail model (rails share possessions
//! and renewal timing) is compared with two independent single-rail runs.

use crate::config::{LccParameters, MaintenanceStrategy, TrackSpec, TrackStrategy};
use crate::error::Result;
use crate::model::{CurveProvider, RailCurves};
use crate::simulation::{RunOptions, simulate_rail, simulate_track};

use super::config::IntervalRange;
use super::map_evaluations;
use super::result::ComparisonRow;

pub fn compare_joint_vs_separate<P>(
    params: &LccParameters,
    provider: &P,
    track: &TrackSpec,
    grinding_intervals: IntervalRange,
    gauge_correction_interval: u32,
) -> Result<Vec<ComparisonRow>>
where
    P: CurveProvider + ?Sized,
{
    grinding_intervals.validate("grinding_interval")?;
    let intervals: Vec<u32> = grinding_intervals.iter().collect();

    let high = RailCurves::resolve(provider, &track.high())?;
    let low = RailCurves::resolve(provider, &track.low())?;
    let life = f64::from(params.technical_life_years);
    let track_renewal = params.track_renewal_cost() / params.track_length_m;

    map_evaluations(&intervals, |&interval| -> Result<ComparisonRow> {
        let joint = simulate_track(
            params,
            &high,
            &low,
            &TrackStrategy::uniform(interval, gauge_correction_interval),
            RunOptions::default(),
        )?;
        let strategy = MaintenanceStrategy::new(interval, gauge_correction_interval);
        let high_only = simulate_rail(params, &high, &strategy, RunOptions::default())?;
        let low_only = simulate_rail(params, &low, &strategy, RunOptions::default())?;

        let high_total = high_only.annuity * life;
        let low_total = low_only.annuity * life;
        Ok(ComparisonRow {
            grinding_interval: interval,
            joint_annuity: joint.annuity,
            joint_lifetime_years: joint.lifetime_years,
            joint_total_lcc: joint.annuity * life + track_renewal,
            high_annuity: high_only.annuity,
            high_lifetime_years: high_only.lifetime_years,
            high_total_lcc: high_total,
            low_annuity: low_only.annuity,
            low_lifetime_years: low_only.lifetime_years,
            low_total_lcc: low_total,
            separate_total_lcc: high_total + low_total + track_renewal,
        })
    })
    .into_iter()
    .collect()
}
