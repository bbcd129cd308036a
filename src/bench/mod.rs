//! The benchmark harness: inputs, kernels, the comparison runner and the
//! scenario catalog.

pub mod inputs;
pub mod kernels;
pub mod layout;
pub mod runner;
pub mod scenarios;
pub mod timing;

pub use inputs::RandomInputs;
pub use runner::{run_comparison, ComparisonReport, PathTiming, Side};
pub use scenarios::{run_suite, Scenario, SuiteSummary, SCENARIOS};
