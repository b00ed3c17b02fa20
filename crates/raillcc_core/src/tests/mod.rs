//! Scenario tests for the life-cycle cost engine
//!
//! Tests are organized by topic:
//! - `fixtures` - Synthetic curve sets shared by the other modules
//! - `single_rail` - One rail: closed-form lifetimes, horizon fallback, milling
//! - `two_rails` - Renewal options and shared possessions on a two-rail track
//! - `properties` - Determinism, history neutrality, counter and reset invariants, errors
//! - `optimization` - Sweeps, strategy search and joint/separate comparison
