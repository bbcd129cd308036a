//! Bit-exact conversion of flat float buffers into typed arrays.
//!
//! Every benchmark value type (`f32`, `Vec3`, `Triangle`, `f8`,
//! `SimdVector3`, `SimdTriangle`) is a `Pod` aggregate of `f32` with no
//! padding, so a buffer of `k * n` floats is exactly the bytes of `n`
//! values that are `k` floats wide. The conversion copies bytes; it never
//! converts values field by field.

use std::mem::size_of;

use bytemuck::Pod;
use f8_lanes::LANES;

use crate::error::BenchError;

/// Number of `f32` words one `T` occupies.
pub const fn floats_per<T>() -> usize {
    size_of::<T>() / size_of::<f32>()
}

/// Lane-packed element count for `scalar_len` scalar problems.
///
/// Fails unless `scalar_len` is a multiple of the lane width; partial
/// lane-packed elements are never padded or rounded.
pub fn packed_len(scalar_len: usize) -> Result<usize, BenchError> {
    if scalar_len % LANES != 0 {
        return Err(BenchError::UnalignedCount {
            count: scalar_len,
            lanes: LANES,
        });
    }
    Ok(scalar_len / LANES)
}

/// Copy `floats` bit-for-bit into a freshly allocated `Vec<T>`.
///
/// The destination is allocated as `T` so it carries `T`'s alignment
/// (32 bytes for the lane-packed types), which a `Vec<f32>` cannot
/// guarantee for an in-place cast.
pub fn cast_floats<T: Pod>(floats: &[f32]) -> Result<Vec<T>, BenchError> {
    let per = floats_per::<T>();
    if per == 0 || floats.len() % per != 0 {
        return Err(BenchError::Layout {
            floats: floats.len(),
            floats_per_value: per,
            type_name: std::any::type_name::<T>(),
        });
    }
    let mut out = vec![T::zeroed(); floats.len() / per];
    bytemuck::cast_slice_mut::<T, f32>(&mut out).copy_from_slice(floats);
    Ok(out)
}
