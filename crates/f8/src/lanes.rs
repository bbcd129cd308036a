//! The eight-lane packed scalar.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use wide::{f32x8, CmpNe};

/// Number of independent `f32` lanes in an [`f8`].
pub const LANES: usize = 8;

/// Worst-case relative error of [`f8::rsqrt`] against `1.0 / x.sqrt()`.
///
/// The hardware estimate alone is only good to about 12 bits on x86 (and
/// 8 bits on NEON); one Newton-Raphson step keeps the refined result well
/// inside this bound on every target.
pub const RSQRT_MAX_REL_ERROR: f32 = 1.0 / 4096.0;

/// Eight `f32` values operated on as a unit.
///
/// Every operation applies independently to each lane; no operation ever
/// mixes values across lanes except the explicit `reduce_*` folds.
///
/// The layout is exactly eight consecutive `f32` (32 bytes, 32-byte
/// aligned, no padding), so flat float buffers can be bit-copied into
/// `[f8]` and back.
#[allow(non_camel_case_types)]
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct f8(f32x8);

// SAFETY: `f8` is a transparent wrapper over `f32x8`, which is eight `f32`
// with no padding. Any bit pattern is a valid value and all-zero is 0.0.
unsafe impl bytemuck::Zeroable for f8 {}
unsafe impl bytemuck::Pod for f8 {}

impl f8 {
    pub const ZERO: Self = Self(f32x8::ZERO);
    pub const ONE: Self = Self(f32x8::ONE);

    #[inline(always)]
    pub fn new(lanes: [f32; LANES]) -> Self {
        Self(f32x8::new(lanes))
    }

    /// Broadcast one value to all lanes.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self(f32x8::splat(value))
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; LANES] {
        self.0.to_array()
    }

    /// Value of lane `i`. Panics if `i >= LANES`.
    #[inline]
    pub fn lane(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(self.0.max(rhs.0))
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        self * self
    }

    /// Approximate `1 / sqrt(x)` per lane.
    ///
    /// Hardware estimate followed by one Newton-Raphson step; accurate to
    /// [`RSQRT_MAX_REL_ERROR`] for positive normal inputs.
    ///
    /// Lanes whose estimate is zero or not finite skip the refinement and
    /// keep the estimate: zero gives `+inf`, `+inf` gives zero, negative
    /// lanes give NaN. Subnormal lanes give `+inf` on targets whose
    /// estimate flushes them to zero.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        let y = self.0.recip_sqrt();
        let half_x = self.0 * f32x8::splat(0.5);
        let refined = y * (f32x8::splat(1.5) - half_x * y * y);
        let refine = y.is_finite() & y.cmp_ne(f32x8::ZERO);
        Self(refine.blend(refined, y))
    }

    /// `a + (b - a) * t`, per lane.
    #[inline(always)]
    pub fn lerp(a: Self, b: Self, t: Self) -> Self {
        a + (b - a) * t
    }

    /// Sum of the eight lanes, folded left to right.
    #[inline]
    pub fn reduce_sum(self) -> f32 {
        self.to_array().iter().fold(0.0, |acc, &v| acc + v)
    }

    #[inline]
    pub fn reduce_min(self) -> f32 {
        self.to_array().into_iter().reduce(f32::min).unwrap_or(f32::NAN)
    }

    #[inline]
    pub fn reduce_max(self) -> f32 {
        self.to_array().into_iter().reduce(f32::max).unwrap_or(f32::NAN)
    }
}

impl fmt::Debug for f8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f8{:?}", self.to_array())
    }
}

impl From<[f32; LANES]> for f8 {
    #[inline(always)]
    fn from(lanes: [f32; LANES]) -> Self {
        Self::new(lanes)
    }
}

impl From<f32> for f8 {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

macro_rules! lane_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for f8 {
            type Output = f8;
            #[inline(always)]
            fn $method(self, rhs: f8) -> f8 {
                f8(self.0.$method(rhs.0))
            }
        }

        impl $trait<f32> for f8 {
            type Output = f8;
            #[inline(always)]
            fn $method(self, rhs: f32) -> f8 {
                f8(self.0.$method(f32x8::splat(rhs)))
            }
        }

        impl $trait<f8> for f32 {
            type Output = f8;
            #[inline(always)]
            fn $method(self, rhs: f8) -> f8 {
                f8(f32x8::splat(self).$method(rhs.0))
            }
        }
    };
}

lane_binop!(Add, add);
lane_binop!(Sub, sub);
lane_binop!(Mul, mul);
lane_binop!(Div, div);

impl Neg for f8 {
    type Output = f8;
    #[inline(always)]
    fn neg(self) -> f8 {
        f8(-self.0)
    }
}

impl AddAssign for f8 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: f8) {
        self.0 = self.0 + rhs.0;
    }
}
