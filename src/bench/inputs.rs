//! Seeded random input arrays shared by every scenario.

use bytemuck::Pod;
use f8_lanes::{f8, SimdTriangle, SimdVector3, LANES};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::layout::{cast_floats, floats_per};
use super::timing::Timed;
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::geometry::Triangle;

/// `f8` values per lane-packed element in the flat float arrays; four
/// quadratic records of `(a, b, c, x)` each.
pub const FLOATS_PER_ELEMENT: usize = 16;

/// `cnt` floats uniform in `[0, 1)`.
pub fn generate_floats<R: Rng>(rng: &mut R, cnt: usize) -> Vec<f32> {
    (0..cnt).map(|_| rng.gen::<f32>()).collect()
}

/// `cnt` values of `T` whose bytes are random floats.
pub fn generate<T: Pod, R: Rng>(rng: &mut R, cnt: usize) -> Result<Vec<T>, BenchError> {
    let floats = generate_floats(rng, cnt * floats_per::<T>());
    cast_floats(&floats)
}

/// Input arrays for both code paths.
///
/// Each scalar array holds `LANES` times as many elements as its
/// lane-packed counterpart, so both paths see the same number of floats.
/// The two paths get different random values; only their shapes match.
pub struct RandomInputs {
    pub simd_floats: Vec<f8>,
    pub simd_points: Vec<SimdVector3>,
    pub simd_triangles: Vec<SimdTriangle>,
    pub floats: Vec<f32>,
    pub points: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
}

impl RandomInputs {
    /// Generate every array from one `ChaCha8Rng`, in a fixed order, so a
    /// seed always reproduces the same inputs.
    pub fn generate(count: usize, seed: u64) -> Result<Self, BenchError> {
        let _t = Timed::info(format!("generate inputs ({} packed elements, seed {})", count, seed));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let simd_floats: Vec<f8> = generate(&mut rng, count * FLOATS_PER_ELEMENT)?;
        let simd_points: Vec<SimdVector3> = generate(&mut rng, count)?;
        let simd_triangles: Vec<SimdTriangle> = generate(&mut rng, count)?;

        let floats = generate_floats(&mut rng, count * FLOATS_PER_ELEMENT * LANES);
        let points: Vec<Vec3> = generate(&mut rng, count * LANES)?;
        let triangles: Vec<Triangle> = generate(&mut rng, count * LANES)?;

        Ok(Self {
            simd_floats,
            simd_points,
            simd_triangles,
            floats,
            points,
            triangles,
        })
    }

    /// Inputs sized for `config.problems` scalar problems.
    pub fn from_config(config: &BenchConfig) -> Result<Self, BenchError> {
        let count = config.validate()?;
        Self::generate(count, config.seed)
    }

    /// Lane-packed element count.
    pub fn count(&self) -> usize {
        self.simd_points.len()
    }
}
