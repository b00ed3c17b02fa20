//! Present-value cost ledger
//!
//! Every event in month `m` is discounted over `m / 12` years. Each rail
//! keeps its own maintenance, capacity (possession) and renewal buckets;
//! gauge correction is booked once for the whole track.

use serde::{Deserialize, Serialize};

use crate::config::LccParameters;
use crate::model::RailSide;

/// Discount `amount` incurred in `month` back to month zero
pub fn present_value(amount: f64, discount_rate: f64, month: u32) -> f64 {
    let years = f64::from(month) / 12.0;
    amount / (1.0 + discount_rate).powf(years)
}

/// Cost of one activity, split into work/material and track possession
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub material: f64,
    pub possession: f64,
}

impl Charge {
    pub fn total(&self) -> f64 {
        self.material + self.possession
    }

    fn discounted(self, discount_rate: f64, month: u32) -> Self {
        Self {
            material: present_value(self.material, discount_rate, month),
            possession: present_value(self.possession, discount_rate, month),
        }
    }
}

/// Nominal activity costs derived from the parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    discount_rate: f64,
    grinding: Charge,
    tamping: Charge,
    milling: Charge,
    rail_renewal: Charge,
}

impl CostModel {
    pub fn new(params: &LccParameters) -> Self {
        let per_hour = params.capacity_cost_per_hour;
        let length = params.track_length_m;
        Self {
            discount_rate: params.discount_rate,
            grinding: Charge {
                material: params.grinding_cost_per_m * length,
                possession: params.grinding_possession_hours * per_hour,
            },
            tamping: Charge {
                material: params.tamping_cost_per_m * length,
                possession: params.tamping_possession_hours * per_hour,
            },
            milling: Charge {
                material: params.milling_cost_factor * params.grinding_cost_per_m * length,
                possession: params.milling_possession_hours * per_hour,
            },
            rail_renewal: Charge {
                material: params.rail_renewal_cost(),
                possession: params.new_rail_possession_hours() * per_hour,
            },
        }
    }

    pub fn grinding(&self, month: u32) -> Charge {
        self.grinding.discounted(self.discount_rate, month)
    }

    pub fn tamping(&self, month: u32) -> Charge {
        self.tamping.discounted(self.discount_rate, month)
    }

    pub fn milling(&self, month: u32) -> Charge {
        self.milling.discounted(self.discount_rate, month)
    }

    pub fn rail_renewal(&self, month: u32) -> Charge {
        self.rail_renewal.discounted(self.discount_rate, month)
    }
}

/// Present-value buckets for one rail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailLedger {
    pub side: RailSide,
    /// Grinding and milling work
    pub maintenance: f64,
    /// Possession for grinding, milling and rail renewal
    pub capacity: f64,
    /// Renewal material
    pub renewal: f64,
}

impl RailLedger {
    pub fn new(side: RailSide) -> Self {
        Self {
            side,
            maintenance: 0.0,
            capacity: 0.0,
            renewal: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.maintenance + self.capacity + self.renewal
    }
}

/// Gauge correction, booked once for the whole track
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedLedger {
    pub tamping: f64,
    pub tamping_capacity: f64,
}

impl SharedLedger {
    pub fn total(&self) -> f64 {
        self.tamping + self.tamping_capacity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLedger {
    pub rails: Vec<RailLedger>,
    pub shared: SharedLedger,
}

impl CostLedger {
    pub fn new(sides: &[RailSide]) -> Self {
        Self {
            rails: sides.iter().map(|&side| RailLedger::new(side)).collect(),
            shared: SharedLedger::default(),
        }
    }

    pub fn rail(&self, side: RailSide) -> Option<&RailLedger> {
        self.rails.iter().find(|r| r.side == side)
    }

    /// Grinding on the rails flagged in `ground`. Rails ground in the same
    /// month share one possession; the work is charged to each rail in full.
    pub fn book_grinding(&mut self, ground: &[bool], charge: Charge) {
        let grinders = ground.iter().filter(|&&g| g).count();
        if grinders == 0 {
            return;
        }
        let possession = charge.possession / grinders as f64;
        for (rail, _) in self.rails.iter_mut().zip(ground).filter(|(_, g)| **g) {
            rail.maintenance += charge.material;
            rail.capacity += possession;
        }
    }

    pub fn book_milling(&mut self, rail: usize, charge: Charge) {
        if let Some(ledger) = self.rails.get_mut(rail) {
            ledger.maintenance += charge.material;
            ledger.capacity += charge.possession;
        }
    }

    pub fn book_tamping(&mut self, charge: Charge) {
        self.shared.tamping += charge.material;
        self.shared.tamping_capacity += charge.possession;
    }

    /// A single rail replaced while the track stays in service
    pub fn book_rail_renewal(&mut self, rail: usize, charge: Charge) {
        if let Some(ledger) = self.rails.get_mut(rail) {
            ledger.renewal += charge.material;
            ledger.capacity += charge.possession;
        }
    }

    pub fn total(&self) -> f64 {
        self.rails.iter().map(RailLedger::total).sum::<f64>() + self.shared.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_present_value_discounts_by_elapsed_years() {
        assert_close(present_value(104.0, 0.04, 12), 100.0);
        assert_close(present_value(100.0, 0.04, 0), 100.0);
        assert_close(present_value(100.0, 0.0, 120), 100.0);
    }

    #[test]
    fn test_cost_model_defaults() {
        let model = CostModel::new(&LccParameters::default());
        let grinding = model.grinding(12);
        assert_close(grinding.material, 60_000.0 / 1.04);
        assert_close(grinding.possession, 2.0 * 50_293.0 / 1.04);

        let milling = model.milling(12);
        assert_close(milling.material, grinding.material * 5.0 / 3.0);
        assert_close(milling.possession, grinding.possession * 5.0 / 3.0);

        let renewal = model.rail_renewal(12);
        assert_close(renewal.material, 1_500_000.0 / 1.04);
        assert_close(renewal.possession, 25.0 * 50_293.0 / 1.04);
    }

    #[test]
    fn test_simultaneous_grinding_shares_possession() {
        let charge = Charge {
            material: 60.0,
            possession: 100.0,
        };
        let mut ledger = CostLedger::new(&[RailSide::High, RailSide::Low]);
        ledger.book_grinding(&[true, true], charge);

        let high = ledger.rail(RailSide::High).unwrap();
        let low = ledger.rail(RailSide::Low).unwrap();
        assert_close(high.maintenance, 60.0);
        assert_close(low.maintenance, 60.0);
        assert_close(high.capacity + low.capacity, 100.0);
        assert_close(high.capacity, low.capacity);
    }

    #[test]
    fn test_single_grinding_pays_full_possession() {
        let charge = Charge {
            material: 60.0,
            possession: 100.0,
        };
        let mut ledger = CostLedger::new(&[RailSide::High, RailSide::Low]);
        ledger.book_grinding(&[false, true], charge);

        assert_close(ledger.rails[0].total(), 0.0);
        assert_close(ledger.rails[1].capacity, 100.0);
        assert_close(ledger.total(), 160.0);
    }

    #[test]
    fn test_rail_renewal_buckets() {
        let mut ledger = CostLedger::new(&[RailSide::High]);
        ledger.book_rail_renewal(
            0,
            Charge {
                material: 10.0,
                possession: 3.0,
            },
        );
        assert_close(ledger.rails[0].renewal, 10.0);
        assert_close(ledger.rails[0].capacity, 3.0);
        assert_close(ledger.shared.total(), 0.0);
    }
}
