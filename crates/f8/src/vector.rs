//! Eight 3D vectors packed coordinate-wise.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use glam::Vec3;

use crate::lanes::{f8, LANES};

/// Eight independent 3D vectors; lane `i` of `x`, `y` and `z` together form
/// vector `i`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimdVector3 {
    pub x: f8,
    pub y: f8,
    pub z: f8,
}

impl SimdVector3 {
    pub const ZERO: Self = Self::new(f8::ZERO, f8::ZERO, f8::ZERO);

    #[inline(always)]
    pub const fn new(x: f8, y: f8, z: f8) -> Self {
        Self { x, y, z }
    }

    /// The same vector in every lane.
    #[inline]
    pub fn splat(v: Vec3) -> Self {
        Self::new(f8::splat(v.x), f8::splat(v.y), f8::splat(v.z))
    }

    /// Pack eight vectors, one per lane.
    pub fn from_lanes(vs: [Vec3; LANES]) -> Self {
        Self::new(
            f8::new(vs.map(|v| v.x)),
            f8::new(vs.map(|v| v.y)),
            f8::new(vs.map(|v| v.z)),
        )
    }

    /// Vector held in lane `i`. Panics if `i >= LANES`.
    #[inline]
    pub fn lane(&self, i: usize) -> Vec3 {
        Vec3::new(self.x.lane(i), self.y.lane(i), self.z.lane(i))
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f8 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline(always)]
    pub fn length_squared(self) -> f8 {
        self.x.square() + self.y.square() + self.z.square()
    }

    #[inline(always)]
    pub fn length(self) -> f8 {
        self.length_squared().sqrt()
    }

    /// Unit vector per lane. Zero-length lanes become NaN.
    #[inline(always)]
    pub fn normal(self) -> Self {
        self / self.length()
    }

    /// Unit vector per lane using [`f8::rsqrt`] instead of a divide.
    #[inline(always)]
    pub fn normal_fast(self) -> Self {
        self * self.length_squared().rsqrt()
    }

    #[inline(always)]
    pub fn lerp(a: Self, b: Self, t: f8) -> Self {
        Self::new(f8::lerp(a.x, b.x, t), f8::lerp(a.y, b.y, t), f8::lerp(a.z, b.z, t))
    }

    /// Component-wise minimum across all eight lanes.
    pub fn reduce_min(&self) -> Vec3 {
        Vec3::new(self.x.reduce_min(), self.y.reduce_min(), self.z.reduce_min())
    }

    /// Component-wise maximum across all eight lanes.
    pub fn reduce_max(&self) -> Vec3 {
        Vec3::new(self.x.reduce_max(), self.y.reduce_max(), self.z.reduce_max())
    }

    /// Sum of the eight vectors.
    pub fn reduce_sum(&self) -> Vec3 {
        Vec3::new(self.x.reduce_sum(), self.y.reduce_sum(), self.z.reduce_sum())
    }
}

impl Add for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for SimdVector3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<f8> for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: f8) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f32> for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn div(self, s: f32) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Div<f8> for SimdVector3 {
    type Output = Self;
    #[inline(always)]
    fn div(self, s: f8) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}
