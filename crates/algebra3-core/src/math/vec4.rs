// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Index, IndexMut};

use crate::math::Vec3;
use crate::MathError;

/// Homogeneous 4-component vector.
///
/// Carries matrix columns and rows and the operand of `Mat4 * Vec4`.
/// Equality is exact per component.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a [`Vec3`] with the homogeneous coordinate `w`.
    pub fn from_vec3(v: &Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Returns component `index` (`0..4`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::VectorIndexOutOfRange { index, len: 4 })
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}
