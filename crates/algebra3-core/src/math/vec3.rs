// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::{clamp, clamp01, rad_to_deg, Tolerance, VEC3_EPSILON};
use crate::MathError;

/// 3D vector used for points, directions, Euler angles, and scale factors.
///
/// * Components are plain `f32`; no operation validates its input, so
///   degenerate cases (normalizing a zero vector, projecting onto a zero
///   normal) propagate as NaN/Infinity.
/// * `==` is approximate: two vectors are equal when their squared distance is
///   below [`VEC3_EPSILON`]². Use [`Vec3::exact_eq`] for bitwise-style
///   component comparison. The difference of two infinities is NaN, so a
///   vector with an infinite component never equals itself under `==`;
///   `exact_eq` does.
/// * Use [`crate::math::Mat4::multiply_point`] for points (`w = 1`) and
///   [`crate::math::Mat4::multiply_vector`] for directions (`w = 0`).
#[derive(Debug, Copy, Clone, Default)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// All components `+∞`.
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    /// All components `-∞`.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::RIGHT;
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::UP;
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::FORWARD;

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector on the XY plane (`z = 0`).
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Returns component `index` (`0 = x`, `1 = y`, `2 = z`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::VectorIndexOutOfRange { index, len: 3 })
    }

    /// Overwrites all three components in place.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data = [x, y, z];
    }

    /// Multiplies each component by the matching component of `factors`, in place.
    pub fn scale(&mut self, factors: &Self) {
        *self = self.scaled(factors);
    }

    /// Component-wise product with `factors`.
    pub fn scaled(&self, factors: &Self) -> Self {
        Self::new(
            self.component(0) * factors.component(0),
            self.component(1) * factors.component(1),
            self.component(2) * factors.component(2),
        )
    }

    /// Exact component comparison (no epsilon).
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.data == other.data
    }

    /// Per-component comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length; avoids the square root when only comparing lengths.
    pub fn sqr_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        (*other - *self).magnitude()
    }

    /// Returns the vector divided by its magnitude.
    ///
    /// There is no zero guard: a zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// Normalizes the vector in place. Same zero-length caveat as
    /// [`Vec3::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unsigned angle in degrees between two directions, in `[0, 180]`.
    ///
    /// # Examples
    /// ```
    /// use algebra3_core::math::Vec3;
    /// let angle = Vec3::RIGHT.angle(&Vec3::UP);
    /// assert!((angle - 90.0).abs() < 1e-4);
    /// ```
    pub fn angle(&self, to: &Self) -> f32 {
        let cos = clamp(self.normalized().dot(&to.normalized()), -1.0, 1.0);
        rad_to_deg(libm::acosf(cos))
    }

    /// Rescales the vector so its length is exactly `max_length`.
    ///
    /// Vectors shorter than `max_length` are stretched as well; this is a
    /// rescale, not an upper bound.
    pub fn clamp_magnitude(&self, max_length: f32) -> Self {
        *self / self.magnitude() * max_length
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        self.lerp_unclamped(to, clamp01(t))
    }

    /// Linear interpolation without clamping `t`.
    pub fn lerp_unclamped(&self, to: &Self, t: f32) -> Self {
        Self::new(
            self.component(0) + (to.component(0) - self.component(0)) * t,
            self.component(1) + (to.component(1) - self.component(1)) * t,
            self.component(2) + (to.component(2) - self.component(2)) * t,
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.component(0).max(other.component(0)),
            self.component(1).max(other.component(1)),
            self.component(2).max(other.component(2)),
        )
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.component(0).min(other.component(0)),
            self.component(1).min(other.component(1)),
            self.component(2).min(other.component(2)),
        )
    }

    /// Projects the vector onto `on_normal`, which must be non-zero.
    pub fn project(&self, on_normal: &Self) -> Self {
        *on_normal * (self.dot(on_normal) / on_normal.sqr_magnitude())
    }

    /// Reflects the vector off the plane defined by `in_normal`.
    ///
    /// `in_normal` is expected to be unit length.
    pub fn reflect(&self, in_normal: &Self) -> Self {
        *self - *in_normal * (2.0 * in_normal.dot(self))
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).sqr_magnitude() < VEC3_EPSILON * VEC3_EPSILON
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use algebra3_core::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {}   Y = {}   Z = {}", self.x(), self.y(), self.z())
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.component(0), -self.component(1), -self.component(2))
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.component(0) / scalar,
            self.component(1) / scalar,
            self.component(2) / scalar,
        )
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
