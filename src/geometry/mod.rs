//! Scalar reference geometry.
//!
//! `glam::Vec3` is the scalar vector; [`Triangle`] adds the triangle
//! operations benchmarked against `f8_lanes::SimdTriangle`.

mod triangle;

pub use triangle::*;
