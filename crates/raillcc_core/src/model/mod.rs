//! Domain model: curve keys, curve data, events and simulation output

mod curves;
mod events;
mod keys;
mod results;

pub use curves::{CurveProvider, CurveRecord, CurveSet, CurveStore, MonthSamples, RailCurves};
pub use events::MaintenanceEvent;
pub use keys::{Condition, CurveKey, RailSide};
pub use results::{LccOutcome, MonthRecord, RailSnapshot};
