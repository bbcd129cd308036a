//! Eight triangles packed vertex-wise.

use glam::Vec3;

use crate::lanes::{f8, LANES};
use crate::vector::SimdVector3;

/// Eight independent triangles, one per lane.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimdTriangle {
    pub a: SimdVector3,
    pub b: SimdVector3,
    pub c: SimdVector3,
}

impl SimdTriangle {
    #[inline(always)]
    pub const fn new(a: SimdVector3, b: SimdVector3, c: SimdVector3) -> Self {
        Self { a, b, c }
    }

    /// The same triangle in every lane.
    pub fn splat(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::new(SimdVector3::splat(a), SimdVector3::splat(b), SimdVector3::splat(c))
    }

    /// Pack eight `[a, b, c]` triangles, one per lane.
    pub fn from_lanes(tris: [[Vec3; 3]; LANES]) -> Self {
        Self::new(
            SimdVector3::from_lanes(tris.map(|t| t[0])),
            SimdVector3::from_lanes(tris.map(|t| t[1])),
            SimdVector3::from_lanes(tris.map(|t| t[2])),
        )
    }

    /// Vertices of the triangle in lane `i`.
    pub fn lane(&self, i: usize) -> [Vec3; 3] {
        [self.a.lane(i), self.b.lane(i), self.c.lane(i)]
    }

    /// Unit face normal, counter-clockwise winding.
    #[inline(always)]
    pub fn normal(&self) -> SimdVector3 {
        (self.b - self.a).cross(self.c - self.a).normal()
    }

    #[inline(always)]
    pub fn perimeter(&self) -> f8 {
        (self.b - self.a).length() + (self.c - self.b).length() + (self.a - self.c).length()
    }

    /// `a * (1 - u - v) + b * u + c * v`, per lane.
    #[inline(always)]
    pub fn barycentric(&self, u: f8, v: f8) -> SimdVector3 {
        self.a * (1.0 - u - v) + self.b * u + self.c * v
    }
}
