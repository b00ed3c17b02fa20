//! Month-by-month life-cycle cost simulation
//!
//! One engine drives one or two rails. Each month, in order: the gauge
//! widens, each rail degrades (grinding where scheduled), the gauge is
//! corrected where scheduled, rails over the RCF limit are milled, and rails
//! over the index threshold trigger a renewal option. The run stops once
//! every rail has been renewed or the technical life is reached, and the
//! minimum-annuity option is selected.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{
    LccParameters, MaintenanceStrategy, RailSpec, TrackSpec, TrackStrategy, check_interval,
};
use crate::costs::{CostLedger, CostModel};
use crate::degradation::{advance_month, apply_milling};
use crate::error::{ConfigError, Result, SimulationError};
use crate::maintenance::{apply_tamping, milling_due, renewal_due};
use crate::model::{CurveProvider, LccOutcome, MaintenanceEvent, MonthRecord, RailCurves, RailSide};
use crate::renewal::{Progress, RenewalEnumerator};
use crate::simulation_state::TrackState;

/// What to return besides the annuity and lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Keep a record of every simulated month
    pub record_history: bool,
    /// Keep every renewal option, not only the selected one
    pub collect_options: bool,
}

impl RunOptions {
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    #[must_use]
    pub fn with_options(mut self) -> Self {
        self.collect_options = true;
        self
    }
}

/// One rail's curves and grinding interval
#[derive(Debug, Clone, Copy)]
pub struct RailProgram<'a> {
    pub curves: RailCurves<'a>,
    pub grinding_interval: u32,
}

impl<'a> RailProgram<'a> {
    pub fn new(curves: RailCurves<'a>, grinding_interval: u32) -> Self {
        Self {
            curves,
            grinding_interval,
        }
    }
}

/// Life-cycle cost of a single rail
pub fn simulate_rail(
    params: &LccParameters,
    curves: &RailCurves<'_>,
    strategy: &MaintenanceStrategy,
    options: RunOptions,
) -> Result<LccOutcome> {
    let programs = [RailProgram::new(*curves, strategy.grinding_interval)];
    simulate(params, &programs, strategy.gauge_correction_interval, options)
}

/// Life-cycle cost of a two-rail track, enumerating renewal options
pub fn simulate_track(
    params: &LccParameters,
    high: &RailCurves<'_>,
    low: &RailCurves<'_>,
    strategy: &TrackStrategy,
    options: RunOptions,
) -> Result<LccOutcome> {
    let programs = [
        RailProgram::new(*high, strategy.grinding_interval_high),
        RailProgram::new(*low, strategy.grinding_interval_low),
    ];
    simulate(params, &programs, strategy.gauge_correction_interval, options)
}

/// [`simulate_rail`] with curves looked up from a provider
pub fn simulate_rail_with<P>(
    params: &LccParameters,
    provider: &P,
    rail: &RailSpec,
    strategy: &MaintenanceStrategy,
    options: RunOptions,
) -> Result<LccOutcome>
where
    P: CurveProvider + ?Sized,
{
    let curves = RailCurves::resolve(provider, rail)?;
    simulate_rail(params, &curves, strategy, options)
}

/// [`simulate_track`] with curves looked up from a provider
pub fn simulate_track_with<P>(
    params: &LccParameters,
    provider: &P,
    track: &TrackSpec,
    strategy: &TrackStrategy,
    options: RunOptions,
) -> Result<LccOutcome>
where
    P: CurveProvider + ?Sized,
{
    let high = RailCurves::resolve(provider, &track.high())?;
    let low = RailCurves::resolve(provider, &track.low())?;
    simulate_track(params, &high, &low, strategy, options)
}

/// Run the engine over any number of rails sharing one gauge
pub fn simulate(
    params: &LccParameters,
    programs: &[RailProgram<'_>],
    gauge_correction_interval: u32,
    options: RunOptions,
) -> Result<LccOutcome> {
    validate(params, programs, gauge_correction_interval)?;

    let sides: Vec<RailSide> = programs.iter().map(|p| p.curves.side).collect();
    let costs = CostModel::new(params);
    let max_months = params.max_months();
    let widening = params.gauge_widening_per_year / 12.0;

    let mut track = TrackState::new(&sides, params.initial_gauge);
    let mut ledger = CostLedger::new(&sides);
    let mut enumerator = RenewalEnumerator::new(&sides, params.track_length_m);
    let mut history = options.record_history.then(Vec::new);
    let mut ground = vec![false; programs.len()];

    for month in 1..=max_months {
        let mut events = Vec::new();
        track.widen(widening);

        // Grinding
        for (i, program) in programs.iter().enumerate() {
            let rail = &mut track.rails[i];
            ground[i] = advance_month(
                rail,
                &program.curves,
                track.gauge,
                program.grinding_interval,
                params,
            )?;
            if ground[i] {
                events.push(MaintenanceEvent::Grinding { side: rail.side });
            }
        }
        ledger.book_grinding(&ground, costs.grinding(month));

        // Gauge correction
        if apply_tamping(&mut track, gauge_correction_interval, params) {
            ledger.book_tamping(costs.tamping(month));
            events.push(MaintenanceEvent::Tamping);
            trace!(month, "Gauge corrected");
        }

        // Milling
        for (i, program) in programs.iter().enumerate() {
            let rail = &mut track.rails[i];
            if milling_due(rail, params) {
                debug!(month, rail = %rail.side, rcf = rail.rcf_residual, "Milling");
                apply_milling(rail, &program.curves, track.gauge, params)?;
                ledger.book_milling(i, costs.milling(month));
                events.push(MaintenanceEvent::Milling { side: rail.side });
            }
        }

        // Renewal
        let renewal = costs.rail_renewal(month);
        let mut finished = false;
        for i in 0..track.rails.len() {
            if !renewal_due(&track.rails[i], params) {
                continue;
            }
            events.push(MaintenanceEvent::Renewal {
                side: track.rails[i].side,
            });
            match enumerator.on_threshold(i, month, &ledger, renewal)? {
                Progress::Stop => {
                    finished = true;
                    break;
                }
                Progress::Continue => {
                    ledger.book_rail_renewal(i, renewal);
                    track.rails[i].renew();
                }
            }
        }

        if let Some(history) = history.as_mut() {
            history.push(MonthRecord {
                month,
                gauge: track.gauge,
                months_since_tamping: track.months_since_tamping,
                rails: track.snapshots(),
                events,
            });
        }

        if finished {
            break;
        }
        if month == max_months {
            enumerator.on_horizon(month, &ledger, renewal);
        }
    }

    let selected = enumerator
        .select()
        .cloned()
        .ok_or(SimulationError::Invariant("run ended without a renewal option"))?;
    if selected.horizon_years <= 0.0 {
        return Err(SimulationError::Invariant("selected option has no horizon"));
    }

    debug!(
        option = %selected.label,
        annuity = selected.annuity,
        lifetime = selected.horizon_years,
        "Run finished"
    );

    Ok(LccOutcome {
        annuity: selected.annuity,
        lifetime_years: selected.horizon_years,
        selected,
        ledger,
        history,
        options: options
            .collect_options
            .then(|| enumerator.into_options()),
    })
}

fn validate(
    params: &LccParameters,
    programs: &[RailProgram<'_>],
    gauge_correction_interval: u32,
) -> std::result::Result<(), ConfigError> {
    params.validate()?;
    if programs.is_empty() {
        return Err(ConfigError::InvalidParameter {
            name: "rails",
            value: 0.0,
            reason: "at least one rail is required",
        });
    }
    for program in programs {
        check_interval(
            "grinding_interval",
            program.grinding_interval,
            program.curves.common_last_month(),
        )?;
    }
    // Longer than the horizon means the gauge is never corrected
    if gauge_correction_interval == 0 {
        return Err(ConfigError::InvalidInterval {
            name: "gauge_correction_interval",
            value: 0,
            max: u32::MAX,
        });
    }
    Ok(())
}
