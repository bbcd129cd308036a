//! Array-in, array-out kernels timed by the scenarios.
//!
//! Every scalar kernel has a lane-packed twin with the same name prefixed
//! `simd_`. A twin processes one eighth as many elements, each holding
//! eight problems, so both do the same amount of arithmetic.

use f8_lanes::{f8, SimdTriangle, SimdVector3};
use glam::Vec3;

use crate::geometry::{lerp, Triangle};

/// Floats per quadratic record: `a, b, c, x`.
pub const QUADRATIC_RECORD: usize = 4;

#[inline]
pub fn normals(inputs: &[Triangle], outputs: &mut [Vec3]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        *out = tri.normal();
    }
}

#[inline]
pub fn simd_normals(inputs: &[SimdTriangle], outputs: &mut [SimdVector3]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        *out = tri.normal();
    }
}

#[inline]
pub fn perimeters(inputs: &[Triangle], outputs: &mut [f32]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        *out = tri.perimeter();
    }
}

#[inline]
pub fn simd_perimeters(inputs: &[SimdTriangle], outputs: &mut [f8]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        *out = tri.perimeter();
    }
}

/// Writes `[min, max]` of all points into `outputs[0..2]`.
///
/// Panics on empty input or an output shorter than two.
#[inline]
pub fn bounds(inputs: &[Vec3], outputs: &mut [Vec3]) {
    let mut lo = inputs[0];
    let mut hi = inputs[0];
    for &p in inputs {
        lo = lo.min(p);
        hi = hi.max(p);
    }
    outputs[0] = lo;
    outputs[1] = hi;
}

/// Lane-wise `[min, max]`: eight partial boxes, one per lane. Fold with
/// `reduce_min`/`reduce_max` for the overall box.
#[inline]
pub fn simd_bounds(inputs: &[SimdVector3], outputs: &mut [SimdVector3]) {
    let mut lo = inputs[0];
    let mut hi = inputs[0];
    for &p in inputs {
        lo = lo.min(p);
        hi = hi.max(p);
    }
    outputs[0] = lo;
    outputs[1] = hi;
}

/// `a * x² + b * x + c` for each `(a, b, c, x)` record.
#[inline]
pub fn quadratic(inputs: &[f32], outputs: &mut [f32]) {
    for (out, r) in outputs.iter_mut().zip(inputs.chunks_exact(QUADRATIC_RECORD)) {
        let (a, b, c, x) = (r[0], r[1], r[2], r[3]);
        *out = a * (x * x) + b * x + c;
    }
}

#[inline]
pub fn simd_quadratic(inputs: &[f8], outputs: &mut [f8]) {
    for (out, r) in outputs.iter_mut().zip(inputs.chunks_exact(QUADRATIC_RECORD)) {
        let (a, b, c, x) = (r[0], r[1], r[2], r[3]);
        *out = a * (x * x) + b * x + c;
    }
}

/// Sum of all points into `outputs[0]`.
#[inline]
pub fn vector_sum(inputs: &[Vec3], outputs: &mut [Vec3]) {
    let mut sum = Vec3::ZERO;
    for &p in inputs {
        sum += p;
    }
    outputs[0] = sum;
}

/// Lane-wise partial sums into `outputs[0]`; `reduce_sum` gives the total.
#[inline]
pub fn simd_vector_sum(inputs: &[SimdVector3], outputs: &mut [SimdVector3]) {
    let mut sum = SimdVector3::ZERO;
    for &p in inputs {
        sum += p;
    }
    outputs[0] = sum;
}

#[inline]
pub fn float_sum(inputs: &[f32], outputs: &mut [f32]) {
    let mut sum = 0.0;
    for &x in inputs {
        sum += x;
    }
    outputs[0] = sum;
}

#[inline]
pub fn simd_float_sum(inputs: &[f8], outputs: &mut [f8]) {
    let mut sum = f8::ZERO;
    for &x in inputs {
        sum += x;
    }
    outputs[0] = sum;
}

/// Normalize by multiplying with the reciprocal length.
#[inline]
pub fn fast_normals(inputs: &[Vec3], outputs: &mut [Vec3]) {
    for (out, &p) in outputs.iter_mut().zip(inputs) {
        *out = p * p.length_recip();
    }
}

/// Normalize with the reciprocal-square-root estimate.
#[inline]
pub fn simd_fast_normals(inputs: &[SimdVector3], outputs: &mut [SimdVector3]) {
    for (out, &p) in outputs.iter_mut().zip(inputs) {
        *out = p.normal_fast();
    }
}

/// `lerp(a, b, c.x)` for each triangle.
#[inline]
pub fn lerps(inputs: &[Triangle], outputs: &mut [Vec3]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        let t = tri.c.x;
        *out = Vec3::new(
            lerp(tri.a.x, tri.b.x, t),
            lerp(tri.a.y, tri.b.y, t),
            lerp(tri.a.z, tri.b.z, t),
        );
    }
}

#[inline]
pub fn simd_lerps(inputs: &[SimdTriangle], outputs: &mut [SimdVector3]) {
    for (out, tri) in outputs.iter_mut().zip(inputs) {
        *out = SimdVector3::lerp(tri.a, tri.b, tri.c.x);
    }
}

/// Replace each point with a point inside the matching triangle, reading
/// the weights from the point itself: `u = p.x / 2`, `v = p.y / 2`.
///
/// Halving keeps `u + v < 1` for inputs in `[0, 1)`, so repeated runs stay
/// inside the triangles instead of drifting off to infinity.
#[inline]
pub fn barycentrics(inputs: &[Triangle], points: &mut [Vec3]) {
    for (p, tri) in points.iter_mut().zip(inputs) {
        *p = tri.barycentric(p.x * 0.5, p.y * 0.5);
    }
}

#[inline]
pub fn simd_barycentrics(inputs: &[SimdTriangle], points: &mut [SimdVector3]) {
    for (p, tri) in points.iter_mut().zip(inputs) {
        *p = tri.barycentric(p.x * 0.5, p.y * 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f8_lanes::LANES;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_vec3<R: Rng>(rng: &mut R) -> Vec3 {
        Vec3::new(rng.gen(), rng.gen(), rng.gen())
    }

    fn random_triangles(n: usize, seed: u64) -> Vec<Triangle> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| Triangle::new(random_vec3(&mut rng), random_vec3(&mut rng), random_vec3(&mut rng)))
            .collect()
    }

    /// Pack scalar values eight at a time, lane `j` of element `i` taking
    /// scalar `8i + j`.
    fn pack_triangles(tris: &[Triangle]) -> Vec<SimdTriangle> {
        tris.chunks_exact(LANES)
            .map(|c| SimdTriangle::from_lanes(std::array::from_fn(|j| [c[j].a, c[j].b, c[j].c])))
            .collect()
    }

    fn pack_points(points: &[Vec3]) -> Vec<SimdVector3> {
        points
            .chunks_exact(LANES)
            .map(|c| SimdVector3::from_lanes(std::array::from_fn(|j| c[j])))
            .collect()
    }

    fn unpack_points(packed: &[SimdVector3]) -> Vec<Vec3> {
        packed
            .iter()
            .flat_map(|p| (0..LANES).map(move |j| p.lane(j)))
            .collect()
    }

    #[test]
    fn test_normals_agree_across_paths() {
        let tris = random_triangles(64, 1);
        let packed = pack_triangles(&tris);
        let mut scalar = vec![Vec3::ZERO; tris.len()];
        let mut simd = vec![SimdVector3::ZERO; packed.len()];
        normals(&tris, &mut scalar);
        simd_normals(&packed, &mut simd);

        for (i, (s, v)) in scalar.iter().zip(unpack_points(&simd)).enumerate() {
            let cross = (tris[i].b - tris[i].a).cross(tris[i].c - tris[i].a);
            if cross.length() < 1e-3 {
                continue;
            }
            assert!(s.abs_diff_eq(v, 1e-5), "triangle {}: {:?} vs {:?}", i, s, v);
        }
    }

    #[test]
    fn test_perimeters_agree_across_paths() {
        let tris = random_triangles(64, 2);
        let packed = pack_triangles(&tris);
        let mut scalar = vec![0.0; tris.len()];
        let mut simd = vec![f8::ZERO; packed.len()];
        perimeters(&tris, &mut scalar);
        simd_perimeters(&packed, &mut simd);

        let lanes: Vec<f32> = simd.iter().flat_map(|p| p.to_array()).collect();
        for (s, v) in scalar.iter().zip(&lanes) {
            assert!((s - v).abs() < 1e-5);
        }
    }

    #[test]
    fn test_bounds_reduce_to_elementwise_min_max() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 5.0, -2.0),
            Vec3::new(0.5, -7.0, 0.25),
            Vec3::new(3.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 9.0),
            Vec3::new(-0.5, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(0.0, 8.0, -4.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-6.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ];
        let mut scalar = [Vec3::ZERO; 2];
        bounds(&points, &mut scalar);
        assert_eq!(scalar[0], Vec3::new(-6.0, -7.0, -4.0));
        assert_eq!(scalar[1], Vec3::new(4.0, 8.0, 9.0));

        let packed = pack_points(&points);
        let mut simd = [SimdVector3::ZERO; 2];
        simd_bounds(&packed, &mut simd);
        assert_eq!(simd[0].reduce_min(), scalar[0]);
        assert_eq!(simd[1].reduce_max(), scalar[1]);
    }

    #[test]
    #[should_panic]
    fn test_bounds_panics_on_empty_input() {
        let mut out = [Vec3::ZERO; 2];
        bounds(&[], &mut out);
    }

    #[test]
    fn test_sums_match() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let points: Vec<Vec3> = (0..256).map(|_| random_vec3(&mut rng)).collect();
        let expected: Vec3 = points.iter().copied().sum();

        let mut scalar = [Vec3::ZERO; 1];
        vector_sum(&points, &mut scalar);
        assert!(scalar[0].abs_diff_eq(expected, 1e-3));

        let mut simd = [SimdVector3::ZERO; 1];
        simd_vector_sum(&pack_points(&points), &mut simd);
        assert!(simd[0].reduce_sum().abs_diff_eq(expected, 1e-3));

        let floats: Vec<f32> = points.iter().flat_map(|p| p.to_array()).collect();
        let packed: Vec<f8> = floats
            .chunks_exact(LANES)
            .map(|c| f8::new(std::array::from_fn(|j| c[j])))
            .collect();
        let mut fs = [0.0f32; 1];
        let mut ps = [f8::ZERO; 1];
        float_sum(&floats, &mut fs);
        simd_float_sum(&packed, &mut ps);
        let total = expected.x + expected.y + expected.z;
        assert!((fs[0] - total).abs() < 1e-2);
        assert!((ps[0].reduce_sum() - total).abs() < 1e-2);
    }

    #[test]
    fn test_quadratic_records() {
        let inputs = [1.0, 2.0, 3.0, 2.0, 0.5, 0.0, -1.0, 4.0];
        let mut out = [0.0f32; 2];
        quadratic(&inputs, &mut out);
        assert_eq!(out, [11.0, 7.0]);

        let packed: Vec<f8> = inputs.iter().map(|&v| f8::splat(v)).collect();
        let mut simd = [f8::ZERO; 2];
        simd_quadratic(&packed, &mut simd);
        assert_eq!(simd[0], f8::splat(11.0));
        assert_eq!(simd[1], f8::splat(7.0));
    }

    #[test]
    fn test_fast_normals_unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let points: Vec<Vec3> = (0..64).map(|_| random_vec3(&mut rng) + Vec3::splat(0.1)).collect();
        let mut scalar = vec![Vec3::ZERO; points.len()];
        fast_normals(&points, &mut scalar);

        let packed = pack_points(&points);
        let mut simd = vec![SimdVector3::ZERO; packed.len()];
        simd_fast_normals(&packed, &mut simd);

        for (s, v) in scalar.iter().zip(unpack_points(&simd)) {
            assert!((s.length() - 1.0).abs() < 1e-5);
            assert!(s.abs_diff_eq(v, 1e-3));
        }
    }

    #[test]
    fn test_lerps_agree_across_paths() {
        let tris = random_triangles(32, 7);
        let packed = pack_triangles(&tris);
        let mut scalar = vec![Vec3::ZERO; tris.len()];
        let mut simd = vec![SimdVector3::ZERO; packed.len()];
        lerps(&tris, &mut scalar);
        simd_lerps(&packed, &mut simd);
        for (s, v) in scalar.iter().zip(unpack_points(&simd)) {
            assert_eq!(*s, v);
        }
    }

    #[test]
    fn test_barycentrics_stay_inside_unit_cube() {
        let tris = random_triangles(16, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut points: Vec<Vec3> = (0..16).map(|_| random_vec3(&mut rng)).collect();
        let mut packed_points = pack_points(&points);
        let packed_tris = pack_triangles(&tris);

        for _ in 0..50 {
            barycentrics(&tris, &mut points);
            simd_barycentrics(&packed_tris, &mut packed_points);
        }
        for (s, v) in points.iter().zip(unpack_points(&packed_points)) {
            assert!(s.cmpge(Vec3::splat(-1e-6)).all() && s.cmple(Vec3::splat(1.0)).all());
            assert!(s.abs_diff_eq(v, 1e-4));
        }
    }
}
