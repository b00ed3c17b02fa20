//! Rail life-cycle cost command-line tool
//!
//! Loads a YAML scenario (cost parameters, track situation, strategy and
//! degradation curves), runs one analysis from `raillcc_core` and renders a
//! plain-text report.

pub mod cli;
pub mod logging;
pub mod report;
pub mod scenario;

pub use cli::{Cli, Command};
pub use logging::init_logging;
pub use scenario::Scenario;
