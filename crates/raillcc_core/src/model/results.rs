//! Simulation output

use serde::{Deserialize, Serialize};

use super::events::MaintenanceEvent;
use super::keys::RailSide;
use crate::costs::CostLedger;
use crate::renewal::RenewalOption;

/// Condition of one rail at the end of a month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailSnapshot {
    pub side: RailSide,
    pub index: f64,
    pub rcf_residual: f64,
    pub rcf_from_grinding: f64,
    pub months_since_grinding: u32,
}

/// Track state at the end of a simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: u32,
    pub gauge: f64,
    pub months_since_tamping: u32,
    pub rails: Vec<RailSnapshot>,
    pub events: Vec<MaintenanceEvent>,
}

impl MonthRecord {
    pub fn rail(&self, side: RailSide) -> Option<&RailSnapshot> {
        self.rails.iter().find(|r| r.side == side)
    }
}

/// Result of one life-cycle cost run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LccOutcome {
    /// Levelized cost of the selected option (currency per metre per year)
    pub annuity: f64,
    /// Horizon of the selected option (years)
    pub lifetime_years: f64,
    pub selected: RenewalOption,
    /// Present-value ledger at the moment the run stopped
    pub ledger: CostLedger,
    /// Monthly history, when requested
    pub history: Option<Vec<MonthRecord>>,
    /// Every renewal option the run produced, when requested
    pub options: Option<Vec<RenewalOption>>,
}

impl LccOutcome {
    /// Annuity carried over the whole technical life (currency per metre)
    pub fn lcc_track(&self, technical_life_years: u32) -> f64 {
        self.annuity * f64::from(technical_life_years)
    }
}
