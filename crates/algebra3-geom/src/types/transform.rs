// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use algebra3_core::math::{Mat4, Quat, Vec3};
use algebra3_core::MathError;
use tracing::debug;

/// Translation, rotation, and non-uniform scale kept as separate parts.
///
/// Conventions:
/// - `rotation` is expected to be a unit quaternion; [`Mat4::rotate`]
///   normalizes it when converting.
/// - `scale` is applied first, then rotation, then translation
///   (`M = T * R * S`).
/// - Negative or zero scales are stored as given but cannot survive a round
///   trip through [`Transform::from_mat4`], which only accepts matrices that
///   pass [`Mat4::valid_trs`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);

    /// Identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::trs(self.translation, self.rotation, self.scale)
    }

    /// Splits a TRS matrix back into its parts.
    ///
    /// Scale is the length of each basis column; rotation comes from
    /// [`Mat4::rotation`], renormalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotTrs`] when the matrix fails
    /// [`Mat4::valid_trs`] (projective row, shear, mirror, or zero scale).
    pub fn from_mat4(m: &Mat4) -> Result<Self, MathError> {
        if !m.valid_trs() {
            debug!(?m, "matrix is not a TRS composition");
            return Err(MathError::NotTrs);
        }
        let translation = m.multiply_point3x4(&Vec3::ZERO);
        let scale = Vec3::new(
            m.multiply_vector(&Vec3::RIGHT).magnitude(),
            m.multiply_vector(&Vec3::UP).magnitude(),
            m.multiply_vector(&Vec3::FORWARD).magnitude(),
        );
        Ok(Self::new(translation, m.rotation().normalized(), scale))
    }

    /// Maps a local-space point to world space.
    #[must_use]
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.rotation * point.scaled(&self.scale) + self.translation
    }

    /// Maps a local-space direction to world space; translation is ignored
    /// and scale is applied.
    #[must_use]
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.rotation * direction.scaled(&self.scale)
    }

    /// Maps a world-space point back to local space.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when a scale component is zero.
    pub fn inverse_transform_point(&self, point: &Vec3) -> Result<Vec3, MathError> {
        Ok(self.to_mat4().inverse()?.multiply_point3x4(point))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
