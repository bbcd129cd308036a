//! Scalar-versus-lane-packed micro-benchmarks.
//!
//! Times `glam` scalar geometry against the eight-lane types from
//! `f8_lanes` on matched random inputs. See [`bench::scenarios`] for the
//! catalog and [`bench::run_comparison`] for how each pair is timed.

pub mod bench;
pub mod config;
pub mod error;
pub mod geometry;

pub use config::BenchConfig;
pub use error::BenchError;
