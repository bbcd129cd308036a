//! Error type for the benchmark harness.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// A scalar problem count that does not split into whole lane-packed elements.
    #[error("problem count {count} is not a multiple of the lane width {lanes}")]
    UnalignedCount { count: usize, lanes: usize },

    /// A float buffer that does not fill a whole number of target values.
    #[error("{floats} floats do not fill a whole number of {type_name} ({floats_per_value} floats each)")]
    Layout {
        floats: usize,
        floats_per_value: usize,
        type_name: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A kernel panicked while being timed.
    #[error("kernel panicked: {message}")]
    KernelPanicked { message: String },

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
}
