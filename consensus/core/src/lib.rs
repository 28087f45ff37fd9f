pub mod config;
pub mod errors;
pub mod network;
pub mod tspend;

/// Integer type for block heights. Heights are non-negative consensus-wide;
/// call sites receiving signed heights from external interfaces must validate
/// them before they reach consensus code.
pub type Height = u64;
