use glam::Vec3;

/// A single triangle, the scalar counterpart of `SimdTriangle`.
///
/// Laid out as nine consecutive `f32` (`a.xyz`, `b.xyz`, `c.xyz`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unit face normal, counter-clockwise winding.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }

    #[inline]
    pub fn perimeter(&self) -> f32 {
        (self.b - self.a).length() + (self.c - self.b).length() + (self.a - self.c).length()
    }

    #[inline]
    pub fn barycentric(&self, u: f32, v: f32) -> Vec3 {
        self.a * (1.0 - u - v) + self.b * u + self.c * v
    }
}

/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
