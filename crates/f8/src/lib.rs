//! Eight-lane packed single-precision math.
//!
//! [`f8`] holds eight independent `f32` values and applies every operation
//! to all of them at once. [`SimdVector3`] and [`SimdTriangle`] build on it,
//! so one call computes the result for eight vectors or triangles.
//!
//! All types are `#[repr(C)]`/`#[repr(transparent)]` aggregates of `f32`
//! with no padding and implement [`bytemuck::Pod`]; flat float buffers can
//! be bit-copied into them.
//!
//! # Example
//!
//! ```
//! use f8_lanes::{f8, SimdTriangle};
//! use glam::Vec3;
//!
//! let tri = SimdTriangle::splat(Vec3::ZERO, Vec3::X, Vec3::Y);
//! let n = tri.normal();
//! assert!(n.lane(3).abs_diff_eq(Vec3::Z, 1e-6));
//!
//! let p = tri.barycentric(f8::splat(1.0), f8::ZERO);
//! assert_eq!(p.lane(0), Vec3::X);
//! ```

mod lanes;
mod triangle;
mod vector;

pub use lanes::{f8, LANES, RSQRT_MAX_REL_ERROR};
pub use triangle::SimdTriangle;
pub use vector::SimdVector3;
