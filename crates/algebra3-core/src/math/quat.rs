// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::f32::consts::{FRAC_PI_2, PI};
use core::ops::{Mul, MulAssign, Neg};

use tracing::debug;

use crate::math::{
    clamp, clamp01, deg_to_rad, rad_to_deg, Mat4, Tolerance, Vec3, EPSILON, QUAT_EPSILON,
};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Public angles (Euler, axis-angle, [`Quat::angle`]) are in degrees;
///   [`Quat::from_axis_angle`] takes radians.
/// * Rotation semantics require a unit quaternion, but construction never
///   normalizes. Call [`Quat::normalize`] explicitly.
/// * Equality is exact per component, unlike [`Vec3`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::angle_axis`] or [`Quat::euler`] to build rotations.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// X (imaginary) component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y (imaginary) component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z (imaginary) component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W (real) component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON` to
    /// avoid undefined orientations.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.sqr_magnitude();
        if len_sq <= EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let norm_axis = axis / len_sq.sqrt();
        let (sin_half, cos_half) = libm::sincosf(angle * 0.5);
        let scaled = norm_axis * sin_half;
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Rotation of `angle` degrees about `axis` (right-hand rule).
    ///
    /// # Examples
    /// ```
    /// use algebra3_core::math::{Quat, Vec3};
    /// let q = Quat::angle_axis(90.0, Vec3::UP);
    /// // `Vec3` equality is epsilon-based.
    /// assert_eq!(q * Vec3::RIGHT, Vec3::BACK);
    /// ```
    pub fn angle_axis(angle: f32, axis: Vec3) -> Self {
        Self::from_axis_angle(axis, deg_to_rad(angle))
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// The result applies `other`'s rotation first, then `self`'s.
    /// Quaternion multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use algebra3_core::math::{Quat, Vec3};
    /// let yaw = Quat::angle_axis(90.0, Vec3::UP);
    /// let pitch = Quat::angle_axis(90.0, Vec3::RIGHT);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `point` with the sandwich product `q · (point, 0) · q⁻¹`.
    ///
    /// `q⁻¹` is the true inverse `conjugate / |q|²`, so the norm of `q`
    /// cancels and the result matches [`Mat4::rotate`]. A zero quaternion
    /// leaves `point` unchanged.
    pub fn rotate_vector(&self, point: &Vec3) -> Vec3 {
        let norm_sq = self.sqr_magnitude();
        if norm_sq <= 0.0 {
            return *point;
        }
        let pure = Self::new(point.x(), point.y(), point.z(), 0.0);
        let rotated = self.multiply(&pure).multiply(&self.conjugate());
        let inv = 1.0 / norm_sq;
        Vec3::new(rotated.x() * inv, rotated.y() * inv, rotated.z() * inv)
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Squared norm.
    pub fn sqr_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Returns the quaternion divided by its norm; unchanged when the norm is 0.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len <= 0.0 {
            return *self;
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Normalizes in place; a zero quaternion is left untouched.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            self.component(3),
        )
    }

    /// Normalized conjugate; the inverse rotation for unit quaternions.
    pub fn inverse(&self) -> Self {
        self.conjugate().normalized()
    }

    /// Rotation from Euler angles in degrees.
    ///
    /// Applies `x` about the X axis, then `y` about Y, then `z` about Z, all
    /// in fixed axes (`q = qz * qy * qx`).
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        Self::to_quaternion(&Vec3::new(deg_to_rad(x), deg_to_rad(y), deg_to_rad(z)))
    }

    /// [`Quat::euler`] taking the three angles as a vector.
    pub fn euler_vec(euler: &Vec3) -> Self {
        Self::euler(euler.x(), euler.y(), euler.z())
    }

    /// Euler angles in degrees, inverse of [`Quat::euler`].
    ///
    /// X and Z lie in `(-180, 180]`, Y in `[-90, 90]`. Round trips are
    /// approximate and multi-valued near gimbal lock (`|y| = 90`).
    pub fn euler_angles(&self) -> Vec3 {
        let radians = Self::to_euler_angles(self);
        Vec3::new(
            rad_to_deg(radians.x()),
            rad_to_deg(radians.y()),
            rad_to_deg(radians.z()),
        )
    }

    fn to_quaternion(radians: &Vec3) -> Self {
        let (sx, cx) = libm::sincosf(radians.x() * 0.5);
        let (sy, cy) = libm::sincosf(radians.y() * 0.5);
        let (sz, cz) = libm::sincosf(radians.z() * 0.5);
        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    fn to_euler_angles(quat: &Self) -> Vec3 {
        let (x, y, z, w) = (quat.x(), quat.y(), quat.z(), quat.w());

        let roll = libm::atan2f(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));

        let sin_pitch = 2.0 * (w * y - z * x);
        let pitch = if sin_pitch.abs() >= 1.0 {
            FRAC_PI_2.copysign(sin_pitch)
        } else {
            libm::asinf(sin_pitch)
        };

        let yaw = libm::atan2f(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));

        Vec3::new(roll, pitch, yaw)
    }

    /// Component blend with `t` clamped to `[0, 1]`, then normalized.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        self.lerp_unclamped(to, clamp01(t))
    }

    /// Component blend without clamping, then normalized.
    ///
    /// Cheaper than [`Quat::slerp`] but does not move at constant angular
    /// speed; the error grows with the angle between the inputs.
    pub fn lerp_unclamped(&self, to: &Self, t: f32) -> Self {
        Self::new(
            self.component(0) + (to.component(0) - self.component(0)) * t,
            self.component(1) + (to.component(1) - self.component(1)) * t,
            self.component(2) + (to.component(2) - self.component(2)) * t,
            self.component(3) + (to.component(3) - self.component(3)) * t,
        )
        .normalized()
    }

    /// Spherical interpolation with `t` clamped to `[0, 1]`.
    pub fn slerp(&self, to: &Self, t: f32) -> Self {
        self.slerp_unclamped(to, clamp01(t))
    }

    /// Spherical interpolation without clamping `t`.
    ///
    /// Weights are `sin((1 - t)·θ) / sin θ` and `sin(t·θ) / sin θ` with
    /// `θ = acos(dot)`. Coincident or antipodal inputs make `sin θ = 0` and the
    /// result NaN; callers handle those cases.
    pub fn slerp_unclamped(&self, to: &Self, t: f32) -> Self {
        let angle = libm::acosf(clamp(self.dot(to), -1.0, 1.0));
        let sin_angle = libm::sinf(angle);
        let wa = libm::sinf((1.0 - t) * angle) / sin_angle;
        let wb = libm::sinf(t * angle) / sin_angle;
        Self::new(
            self.component(0) * wa + to.component(0) * wb,
            self.component(1) * wa + to.component(1) * wb,
            self.component(2) * wa + to.component(2) * wb,
            self.component(3) * wa + to.component(3) * wb,
        )
    }

    /// Angle in degrees of the rotation taking `self` to `to`, in `[0, 180]`.
    pub fn angle(&self, to: &Self) -> f32 {
        let dot = clamp(self.normalized().dot(&to.normalized()), -1.0, 1.0).abs();
        if Self::is_equal_using_dot(dot) {
            0.0
        } else {
            rad_to_deg(libm::acosf(dot) * 2.0)
        }
    }

    fn is_equal_using_dot(dot: f32) -> bool {
        dot > 1.0 - QUAT_EPSILON
    }

    /// Minimal rotation taking direction `from` onto direction `to`.
    ///
    /// Zero-length inputs yield the identity. Opposite directions rotate 180°
    /// about an axis perpendicular to `from`.
    pub fn from_to_rotation(from: &Vec3, to: &Vec3) -> Self {
        if from.sqr_magnitude() <= EPSILON * EPSILON || to.sqr_magnitude() <= EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let f = from.normalized();
        let t = to.normalized();
        let d = f.dot(&t);
        if d >= 1.0 - QUAT_EPSILON {
            return Self::IDENTITY;
        }
        if d <= -1.0 + QUAT_EPSILON {
            let mut axis = Vec3::RIGHT.cross(&f);
            if axis.sqr_magnitude() <= EPSILON {
                axis = Vec3::UP.cross(&f);
            }
            return Self::from_axis_angle(axis, PI);
        }
        let c = f.cross(&t);
        Self::new(c.x(), c.y(), c.z(), 1.0 + d).normalized()
    }

    /// Rotation whose forward axis (+Z) points along `forward` and whose up
    /// axis (+Y) lies in the plane of `forward` and `upwards`.
    ///
    /// A zero `forward` yields the identity. When `upwards` is parallel to
    /// `forward` the result is [`Quat::from_to_rotation`] from +Z.
    pub fn look_rotation(forward: &Vec3, upwards: &Vec3) -> Self {
        if forward.sqr_magnitude() <= EPSILON * EPSILON {
            debug!(?forward, "look rotation with zero forward; using identity");
            return Self::IDENTITY;
        }
        let f = forward.normalized();
        let right = upwards.cross(&f);
        if right.sqr_magnitude() <= EPSILON * EPSILON {
            return Self::from_to_rotation(&Vec3::FORWARD, &f);
        }
        let r = right.normalized();
        let u = f.cross(&r);
        Self::from_rotation_columns(&r, &u, &f)
    }

    /// [`Quat::look_rotation`] with [`Vec3::UP`] as the up hint.
    pub fn look_rotation_forward(forward: &Vec3) -> Self {
        Self::look_rotation(forward, &Vec3::UP)
    }

    /// Rotates `from` toward `to` by at most `max_degrees_delta`, stopping at `to`.
    pub fn rotate_towards(from: &Self, to: &Self, max_degrees_delta: f32) -> Self {
        let angle = from.angle(to);
        if angle <= 0.0 {
            return *to;
        }
        let t = max_degrees_delta / angle;
        if t >= 1.0 {
            return *to;
        }
        // `to` and `-to` are the same rotation; slerp along the short arc.
        let target = if from.dot(to) < 0.0 { -*to } else { *to };
        from.slerp_unclamped(&target, t)
    }

    /// Builds a quaternion from the columns of a pure rotation block.
    ///
    /// Picks the branch by the dominant diagonal term so the square root never
    /// sees a value near zero. The result is not renormalized.
    pub(crate) fn from_rotation_columns(c0: &Vec3, c1: &Vec3, c2: &Vec3) -> Self {
        let (m00, m10, m20) = (c0.x(), c0.y(), c0.z());
        let (m01, m11, m21) = (c1.x(), c1.y(), c1.z());
        let (m02, m12, m22) = (c2.x(), c2.y(), c2.z());

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Per-component comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalized();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            -self.component(3),
        )
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vector(&rhs)
    }
}
