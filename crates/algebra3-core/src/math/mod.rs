// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar utilities, comparison tolerances, and the vector, quaternion, and
//! matrix value types.
//!
//! All arithmetic is `f32`. Transcendentals go through `libm` so results do not
//! depend on the platform's math library.

use core::f32::consts::TAU;

mod mat4;
mod quat;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Global epsilon used when detecting degenerate values (zero-length axes,
/// zero forward vectors).
pub const EPSILON: f32 = 1e-6;

/// Distance below which two [`Vec3`] values compare equal.
///
/// Equality tests `sqr_distance < VEC3_EPSILON²`.
pub const VEC3_EPSILON: f32 = 1e-5;

/// Quaternion dot-product slack used by [`Quat::angle`] to treat nearly
/// identical rotations as equal.
pub const QUAT_EPSILON: f32 = 1e-6;

/// Ratio of `|det|` to the product of column lengths at or below which
/// [`Mat4::inverse`] refuses to invert.
pub const MAT4_EPSILON: f32 = 1e-6;

/// Allowed deviation of `|q|²` from `1` when [`Mat4::valid_trs`] checks that the
/// extracted rotation is a unit quaternion.
pub const UNIT_NORM_EPSILON: f32 = 1e-4;

/// Absolute/relative tolerance pair for approximate float comparisons.
///
/// The allowed error for a reference value `r` is
/// `max(absolute, relative * |r|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Floor applied near zero.
    pub absolute: f32,
    /// Scale applied to the magnitude of the compared values.
    pub relative: f32,
}

impl Tolerance {
    /// Default tolerance: [`EPSILON`] absolute and relative.
    pub const DEFAULT: Self = Self::new(EPSILON, EPSILON);

    /// Creates a tolerance from its absolute and relative parts.
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Maximum difference accepted around `reference`.
    pub fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `a` and `b` differ by at most the allowed error for
    /// the larger of the two magnitudes.
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.allowed_error(a.abs().max(b.abs()))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
