use crate::model::{RailSide, RailSnapshot};

/// Runtime condition of one rail, mutated month by month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailState {
    pub side: RailSide,
    /// Accumulated H-index; only a renewal brings it back down
    pub index: f64,
    /// Current RCF residual, including this month's depth growth
    pub rcf_residual: f64,
    /// RCF residual left behind by the grinding passes so far
    pub rcf_from_grinding: f64,
    /// Months since the last grinding or milling, counted from 1
    pub months_since_grinding: u32,
}

impl RailState {
    pub fn new(side: RailSide) -> Self {
        Self {
            side,
            index: 0.0,
            rcf_residual: 0.0,
            rcf_from_grinding: 0.0,
            months_since_grinding: 1,
        }
    }

    /// Replace the rail with a new one. The grinding counter keeps running.
    pub fn renew(&mut self) {
        self.index = 0.0;
        self.rcf_residual = 0.0;
        self.rcf_from_grinding = 0.0;
    }

    pub fn snapshot(&self) -> RailSnapshot {
        RailSnapshot {
            side: self.side,
            index: self.index,
            rcf_residual: self.rcf_residual,
            rcf_from_grinding: self.rcf_from_grinding,
            months_since_grinding: self.months_since_grinding,
        }
    }
}

/// Runtime state for the whole track: the rails plus the shared gauge
#[derive(Debug, Clone, PartialEq)]
pub struct TrackState {
    pub rails: Vec<RailState>,
    /// Current track gauge (mm)
    pub gauge: f64,
    /// Months since the last gauge correction, counted from 1
    pub months_since_tamping: u32,
}

impl TrackState {
    pub fn new(sides: &[RailSide], initial_gauge: f64) -> Self {
        Self {
            rails: sides.iter().map(|&side| RailState::new(side)).collect(),
            gauge: initial_gauge,
            months_since_tamping: 1,
        }
    }

    /// Monthly gauge widening
    pub fn widen(&mut self, increment: f64) {
        self.gauge += increment;
    }

    pub fn snapshots(&self) -> Vec<RailSnapshot> {
        self.rails.iter().map(RailState::snapshot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renew_keeps_grinding_counter() {
        let mut rail = RailState {
            side: RailSide::Low,
            index: 13.9,
            rcf_residual: 0.3,
            rcf_from_grinding: 0.2,
            months_since_grinding: 4,
        };
        rail.renew();
        assert_eq!(rail.index, 0.0);
        assert_eq!(rail.rcf_residual, 0.0);
        assert_eq!(rail.rcf_from_grinding, 0.0);
        assert_eq!(rail.months_since_grinding, 4);
    }

    #[test]
    fn test_new_track_starts_at_initial_gauge() {
        let track = TrackState::new(&[RailSide::High, RailSide::Low], 1440.0);
        assert_eq!(track.gauge, 1440.0);
        assert_eq!(track.months_since_tamping, 1);
        assert_eq!(track.rails.len(), 2);
        assert!(track.rails.iter().all(|r| r.months_since_grinding == 1));
    }
}
