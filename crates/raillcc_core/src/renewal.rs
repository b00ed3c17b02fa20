//! Renewal options
//!
//! Every time a rail reaches the index threshold the enumerator records the
//! cost of renewing the whole track at that moment. The run then continues
//! with only the worn rail replaced, until every rail has been renewed (which
//! adds a "renew separately" option) or the technical life runs out (which
//! adds an end-of-life option).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annuity::{option_annuity, select_minimum};
use crate::costs::{Charge, CostLedger};
use crate::error::{Result, SimulationError};
use crate::model::RailSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenewalKind {
    /// Renew every rail when `trigger` reaches the threshold
    Joint { trigger: RailSide },
    /// Each rail renewed on its own, in separate possessions
    Separate,
    /// Technical life reached
    EndOfLife,
}

impl fmt::Display for RenewalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joint { trigger } => write!(f, "Renew both @{}", trigger.tag()),
            Self::Separate => write!(f, "Renew separately"),
            Self::EndOfLife => write!(f, "Renew at end of life"),
        }
    }
}

/// Cost and lifetime of one rail within an option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailCost {
    pub side: RailSide,
    pub lifetime_years: f64,
    pub present_value: f64,
}

/// A candidate renewal timing with its present value and annuity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalOption {
    pub label: String,
    pub kind: RenewalKind,
    pub month: u32,
    pub horizon_years: f64,
    pub rails: Vec<RailCost>,
    pub shared_present_value: f64,
    pub annuity: f64,
}

impl RenewalOption {
    fn new(
        kind: RenewalKind,
        month: u32,
        rails: Vec<RailCost>,
        shared_present_value: f64,
        track_length_m: f64,
    ) -> Self {
        let horizon_years = f64::from(month) / 12.0;
        let annuity = option_annuity(
            rails.iter().map(|r| r.present_value),
            shared_present_value,
            horizon_years,
            track_length_m,
        );
        let label = match kind {
            RenewalKind::Joint { trigger } if rails.len() == 1 => {
                format!("Renew @{}", trigger.tag())
            }
            _ => kind.to_string(),
        };
        Self {
            label,
            kind,
            month,
            horizon_years,
            rails,
            shared_present_value,
            annuity,
        }
    }

    pub fn rail(&self, side: RailSide) -> Option<&RailCost> {
        self.rails.iter().find(|r| r.side == side)
    }

    pub fn total_present_value(&self) -> f64 {
        self.rails.iter().map(|r| r.present_value).sum::<f64>() + self.shared_present_value
    }

    /// Annuity carried over the whole technical life (currency per metre)
    pub fn lcc_track(&self, technical_life_years: u32) -> f64 {
        self.annuity * f64::from(technical_life_years)
    }
}

/// Whether the run goes on after a renewal trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Replace the worn rail and keep simulating
    Continue,
    /// Every rail has been renewed
    Stop,
}

/// Collects renewal options over a run
#[derive(Debug, Clone)]
pub struct RenewalEnumerator {
    sides: Vec<RailSide>,
    lifetimes: Vec<Option<f64>>,
    track_length_m: f64,
    options: Vec<RenewalOption>,
}

impl RenewalEnumerator {
    pub fn new(sides: &[RailSide], track_length_m: f64) -> Self {
        Self {
            sides: sides.to_vec(),
            lifetimes: vec![None; sides.len()],
            track_length_m,
            options: Vec::new(),
        }
    }

    /// Rail `rail` reached the index threshold in `month`.
    ///
    /// `renewal` is the discounted cost of renewing one rail this month.
    pub fn on_threshold(
        &mut self,
        rail: usize,
        month: u32,
        ledger: &CostLedger,
        renewal: Charge,
    ) -> Result<Progress> {
        let (Some(&trigger), Some(lifetime)) =
            (self.sides.get(rail), self.lifetimes.get_mut(rail))
        else {
            return Err(SimulationError::Invariant("renewal triggered on an unknown rail"));
        };
        let horizon = f64::from(month) / 12.0;
        *lifetime = Some(horizon);

        let joint_rails: Vec<RailCost> = ledger
            .rails
            .iter()
            .map(|r| RailCost {
                side: r.side,
                lifetime_years: horizon,
                present_value: r.total() + renewal.material,
            })
            .collect();
        let joint_shared = ledger.shared.total() + renewal.possession;
        let joint = RenewalOption::new(
            RenewalKind::Joint { trigger },
            month,
            joint_rails.clone(),
            joint_shared,
            self.track_length_m,
        );
        debug!(
            month,
            rail = %trigger,
            annuity = joint.annuity,
            "Renewal threshold reached"
        );
        self.options.push(joint);

        if self.lifetimes.iter().any(Option::is_none) {
            return Ok(Progress::Continue);
        }

        if self.sides.len() > 1 {
            // The renewals did not share a possession, so each rail pays its own
            let separate_rails = joint_rails
                .iter()
                .zip(&self.lifetimes)
                .map(|(cost, lifetime)| RailCost {
                    lifetime_years: lifetime.unwrap_or(horizon),
                    present_value: cost.present_value + renewal.possession,
                    ..*cost
                })
                .collect();
            self.options.push(RenewalOption::new(
                RenewalKind::Separate,
                month,
                separate_rails,
                joint_shared - renewal.possession,
                self.track_length_m,
            ));
        }
        Ok(Progress::Stop)
    }

    /// The technical life ran out in `month` before every rail was renewed
    pub fn on_horizon(&mut self, month: u32, ledger: &CostLedger, renewal: Charge) {
        let horizon = f64::from(month) / 12.0;
        let rails = ledger
            .rails
            .iter()
            .map(|r| RailCost {
                side: r.side,
                lifetime_years: horizon,
                present_value: r.total() + renewal.material,
            })
            .collect();
        let option = RenewalOption::new(
            RenewalKind::EndOfLife,
            month,
            rails,
            ledger.shared.total() + renewal.possession,
            self.track_length_m,
        );
        debug!(month, annuity = option.annuity, "Technical life reached");
        self.options.push(option);
    }

    pub fn options(&self) -> &[RenewalOption] {
        &self.options
    }

    /// Minimum-annuity option, first one on ties
    pub fn select(&self) -> Option<&RenewalOption> {
        select_minimum(&self.options, |o| o.annuity)
    }

    pub fn into_options(self) -> Vec<RenewalOption> {
        self.options
    }
}
