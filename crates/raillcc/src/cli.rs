//! Command-line interface
//!
//! Every subcommand reads one scenario file and prints a text report.
//! Intervals given on the command line override the scenario strategy.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use raillcc_core::config::{MaintenanceStrategy, TrackStrategy};
use raillcc_core::model::RailSide;
use raillcc_core::optimization::{
    IntervalRange, SweepTarget, compare_joint_vs_separate, optimize_strategy,
    sweep_grinding_intervals,
};
use raillcc_core::{RunOptions, simulate_rail_with, simulate_track_with};
use tracing::info;

use crate::report;
use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "raillcc")]
#[command(about = "Life-cycle cost of rail maintenance strategies on curved track")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate one rail on its own
    Rail {
        #[command(flatten)]
        input: Input,
        /// Rail to simulate (high/outer or low/inner)
        #[arg(long, default_value = "high")]
        side: RailSide,
        /// Grinding interval in months
        #[arg(long)]
        grinding: Option<u32>,
        /// Gauge-correction interval in months
        #[arg(long)]
        gauge_correction: Option<u32>,
        #[command(flatten)]
        output: Output,
    },
    /// Simulate both rails of the track together
    Track {
        #[command(flatten)]
        input: Input,
        /// Grinding interval of the high rail in months
        #[arg(long)]
        grinding_high: Option<u32>,
        /// Grinding interval of the low rail in months
        #[arg(long)]
        grinding_low: Option<u32>,
        /// Gauge-correction interval in months
        #[arg(long)]
        gauge_correction: Option<u32>,
        #[command(flatten)]
        output: Output,
    },
    /// Sweep grinding intervals at a fixed gauge-correction interval
    Sweep {
        #[command(flatten)]
        input: Input,
        /// Sweep one rail instead of the whole track
        #[arg(long)]
        side: Option<RailSide>,
        #[arg(long)]
        gauge_correction: Option<u32>,
        #[command(flatten)]
        range: Range,
    },
    /// Search the scenario's strategy space for the minimum annuity
    Optimize {
        #[command(flatten)]
        input: Input,
        /// Number of ranked strategies to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Compare joint two-rail maintenance with separate single-rail maintenance
    Compare {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        gauge_correction: Option<u32>,
        #[command(flatten)]
        range: Range,
    },
}

#[derive(Args, Debug)]
pub struct Input {
    /// Scenario file (YAML)
    #[arg(short, long)]
    pub scenario: PathBuf,
}

#[derive(Args, Debug)]
pub struct Output {
    /// List every renewal option
    #[arg(long)]
    pub options: bool,
    /// Print the month-by-month history
    #[arg(long)]
    pub history: bool,
}

impl Output {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            record_history: self.history,
            collect_options: self.options,
        }
    }
}

#[derive(Args, Debug)]
pub struct Range {
    /// Shortest grinding interval in months
    #[arg(long, default_value_t = 1)]
    pub min: u32,
    /// Longest grinding interval in months
    #[arg(long, default_value_t = 12)]
    pub max: u32,
    #[arg(long, default_value_t = 1)]
    pub step: u32,
}

impl Range {
    fn intervals(&self) -> IntervalRange {
        IntervalRange::new(self.min, self.max).with_step(self.step)
    }
}

impl Command {
    pub fn scenario_path(&self) -> &PathBuf {
        match self {
            Command::Rail { input, .. }
            | Command::Track { input, .. }
            | Command::Sweep { input, .. }
            | Command::Optimize { input, .. }
            | Command::Compare { input, .. } => &input.scenario,
        }
    }

    /// Run the command against a loaded scenario and render its report
    pub fn execute(&self, scenario: &Scenario) -> color_eyre::Result<String> {
        let params = &scenario.parameters;

        let report = match self {
            Command::Rail {
                side,
                grinding,
                gauge_correction,
                output,
                ..
            } => {
                let rail = scenario.track.rail(*side);
                let default_interval = match side {
                    RailSide::High => scenario.strategy.grinding_interval_high,
                    RailSide::Low => scenario.strategy.grinding_interval_low,
                };
                let strategy = MaintenanceStrategy::new(
                    grinding.unwrap_or(default_interval),
                    gauge_correction.unwrap_or(scenario.strategy.gauge_correction_interval),
                );
                info!(side = %side, ?strategy, "Simulating single rail");

                let outcome = simulate_rail_with(
                    params,
                    &scenario.curves,
                    &rail,
                    &strategy,
                    output.run_options(),
                )?;
                let title = format!(
                    "{side} rail, {} R{} {}t",
                    rail.profile, rail.radius, rail.load
                );
                report::outcome_report(&title, &outcome, params)
            }
            Command::Track {
                grinding_high,
                grinding_low,
                gauge_correction,
                output,
                ..
            } => {
                let strategy = TrackStrategy::new(
                    grinding_high.unwrap_or(scenario.strategy.grinding_interval_high),
                    grinding_low.unwrap_or(scenario.strategy.grinding_interval_low),
                    gauge_correction.unwrap_or(scenario.strategy.gauge_correction_interval),
                );
                info!(?strategy, "Simulating track");

                let outcome = simulate_track_with(
                    params,
                    &scenario.curves,
                    &scenario.track,
                    &strategy,
                    output.run_options(),
                )?;
                let title = format!(
                    "Track R{} {}t, {}/{}",
                    scenario.track.radius,
                    scenario.track.load,
                    scenario.track.profile_high,
                    scenario.track.profile_low
                );
                report::outcome_report(&title, &outcome, params)
            }
            Command::Sweep {
                side,
                gauge_correction,
                range,
                ..
            } => {
                let target = match side {
                    Some(side) => SweepTarget::Rail(scenario.track.rail(*side)),
                    None => SweepTarget::Track(scenario.track.clone()),
                };
                let sweep = sweep_grinding_intervals(
                    params,
                    &scenario.curves,
                    &target,
                    gauge_correction.unwrap_or(scenario.strategy.gauge_correction_interval),
                    range.intervals(),
                )?;
                report::sweep_report(&sweep)
            }
            Command::Optimize { top, .. } => {
                let result =
                    optimize_strategy(params, &scenario.curves, &scenario.track, &scenario.search)?;
                report::optimization_report(&result, *top)
            }
            Command::Compare {
                gauge_correction,
                range,
                ..
            } => {
                let rows = compare_joint_vs_separate(
                    params,
                    &scenario.curves,
                    &scenario.track,
                    range.intervals(),
                    gauge_correction.unwrap_or(scenario.strategy.gauge_correction_interval),
                )?;
                report::comparison_report(&rows)
            }
        };
        Ok(report)
    }
}
