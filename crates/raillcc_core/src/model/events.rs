use serde::{Deserialize, Serialize};

use super::keys::RailSide;

/// Something that happened to the track in a simulated month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaintenanceEvent {
    Grinding { side: RailSide },
    /// Gauge correction; services every rail at once
    Tamping,
    /// Double grinding after the RCF residual reached its limit
    Milling { side: RailSide },
    /// The rail reached the index threshold and was replaced
    Renewal { side: RailSide },
}
