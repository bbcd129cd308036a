//! Benchmark run configuration.

use f8_lanes::LANES;

use crate::bench::layout::packed_len;
use crate::error::BenchError;

/// Scalar problems per run: 200k lane-packed elements.
pub const DEFAULT_PROBLEMS: usize = 200_000 * LANES;

/// Timed repetitions of each kernel per scenario.
pub const DEFAULT_ITERATIONS: usize = 100;

pub const DEFAULT_SEED: u64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Scalar problem instances per scenario; must be a positive multiple of 8.
    pub problems: usize,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            problems: DEFAULT_PROBLEMS,
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Check the config and return the lane-packed element count it implies.
    pub fn validate(&self) -> Result<usize, BenchError> {
        if self.problems == 0 {
            return Err(BenchError::InvalidConfig("problem count must be positive".into()));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig("iteration count must be positive".into()));
        }
        packed_len(self.problems)
    }
}

/// Parse counts like `1600000`, `400k` or `1.6m`.
pub fn parse_count(s: &str) -> Result<usize, String> {
    let lower = s.trim().to_lowercase();
    let (digits, multiplier) = if let Some(n) = lower.strip_suffix('m') {
        (n, 1_000_000.0)
    } else if let Some(n) = lower.strip_suffix('k') {
        (n, 1_000.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value = digits
        .parse::<f64>()
        .map_err(|e| format!("invalid count '{}': {}", s, e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("invalid count '{}'", s));
    }
    Ok((value * multiplier).round() as usize)
}
