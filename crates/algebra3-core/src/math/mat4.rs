// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Index, IndexMut, Mul, MulAssign};

use tracing::debug;

use crate::math::{Quat, Tolerance, Vec3, Vec4, MAT4_EPSILON, UNIT_NORM_EPSILON};
use crate::MathError;

/// Column‑major 4×4 homogeneous transform.
///
/// - Element `(row, col)` lives at flat index `row + col * 4`.
/// - Equality is exact per element; use [`Mat4::approx_eq`] or
///   [`Mat4::is_identity`] for tolerant checks.
/// - [`Mat4::trs`] composes `T * R * S`: scale first, then rotation, then
///   translation.
///
/// # Examples
/// ```
/// use algebra3_core::math::{Mat4, Vec3};
/// let s = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
/// assert_eq!(s.multiply_point(&Vec3::ONE).to_array(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

/// Determinant of a column-major 3×3 block.
fn det3(m: [f32; 9]) -> f32 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[3] * (m[1] * m[8] - m[2] * m[7])
        + m[6] * (m[1] * m[5] - m[2] * m[4])
}

impl Mat4 {
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// All elements zero.
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its four columns.
    pub fn from_columns(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        let [a, b, c, d] = [c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()];
        Self::new([
            a[0], a[1], a[2], a[3], //
            b[0], b[1], b[2], b[3], //
            c[0], c[1], c[2], c[3], //
            d[0], d[1], d[2], d[3],
        ])
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Reads flat element `index` (`0..16`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index })
    }

    /// Writes flat element `index` (`0..16`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::IndexOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    fn checked_index(row: usize, col: usize) -> Result<usize, MathError> {
        if row < 4 && col < 4 {
            Ok(row + col * 4)
        } else {
            Err(MathError::ElementOutOfRange { row, col })
        }
    }

    /// Reads element `(row, col)`.
    pub fn get_rc(&self, row: usize, col: usize) -> Result<f32, MathError> {
        self.get(Self::checked_index(row, col)?)
    }

    /// Writes element `(row, col)`.
    pub fn set_rc(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
        self.set(Self::checked_index(row, col)?, value)
    }

    /// Returns column `index` (`0..4`).
    pub fn get_column(&self, index: usize) -> Result<Vec4, MathError> {
        if index >= 4 {
            return Err(MathError::ColumnOutOfRange(index));
        }
        Ok(Vec4::new(
            self.at(0, index),
            self.at(1, index),
            self.at(2, index),
            self.at(3, index),
        ))
    }

    /// Returns row `index` (`0..4`).
    pub fn get_row(&self, index: usize) -> Result<Vec4, MathError> {
        if index >= 4 {
            return Err(MathError::RowOutOfRange(index));
        }
        Ok(Vec4::new(
            self.at(index, 0),
            self.at(index, 1),
            self.at(index, 2),
            self.at(index, 3),
        ))
    }

    /// Replaces column `index` (`0..4`).
    pub fn set_column(&mut self, index: usize, column: Vec4) -> Result<(), MathError> {
        if index >= 4 {
            return Err(MathError::ColumnOutOfRange(index));
        }
        self.data[index * 4..index * 4 + 4].copy_from_slice(&column.to_array());
        Ok(())
    }

    /// Replaces row `index` (`0..4`).
    pub fn set_row(&mut self, index: usize, row: Vec4) -> Result<(), MathError> {
        if index >= 4 {
            return Err(MathError::RowOutOfRange(index));
        }
        for (col, value) in row.to_array().into_iter().enumerate() {
            self.data[col * 4 + index] = value;
        }
        Ok(())
    }

    /// Builds a non-uniform scale matrix.
    pub fn scale(factors: Vec3) -> Self {
        Self::new([
            factors.x(), 0.0, 0.0, 0.0, // col 0
            0.0, factors.y(), 0.0, 0.0, // col 1
            0.0, 0.0, factors.z(), 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Builds a translation matrix; the offset occupies the last column.
    pub fn translate(offset: Vec3) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            offset.x(), offset.y(), offset.z(), 1.0, // col 3 (translation)
        ])
    }

    /// Builds the rotation matrix of `q`.
    ///
    /// This simply forwards to [`Quat::to_mat4`], which normalizes first.
    pub fn rotate(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Composes `translate(translation) * rotate(rotation) * scale(scale)`.
    ///
    /// # Examples
    /// ```
    /// use algebra3_core::math::{Mat4, Quat, Vec3};
    /// let t = Vec3::new(1.0, -2.0, 3.0);
    /// let m = Mat4::trs(t, Quat::IDENTITY, Vec3::ONE);
    /// assert_eq!(m.multiply_point(&Vec3::ZERO).to_array(), t.to_array());
    /// ```
    pub fn trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self::translate(translation)
            .multiply(&Self::rotate(&rotation))
            .multiply(&Self::scale(scale))
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// A zero-length axis yields the identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::rotate(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = libm::sincosf(angle);
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = libm::sincosf(angle);
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = libm::sincosf(angle);
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use algebra3_core::math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Matrix-vector product `self * v`.
    pub fn multiply_vec4(&self, v: &Vec4) -> Vec4 {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.at(row, 0) * v.x()
                + self.at(row, 1) * v.y()
                + self.at(row, 2) * v.z()
                + self.at(row, 3) * v.w();
        }
        Vec4::from(out)
    }

    /// Transforms a point with `w = 1`, dividing the result by its `w`.
    ///
    /// For affine matrices the divide is by exactly `1`.
    pub fn multiply_point(&self, point: &Vec3) -> Vec3 {
        let v = self.multiply_vec4(&Vec4::from_vec3(point, 1.0));
        v.xyz() / v.w()
    }

    /// Transforms a point with `w = 1` using only the top three rows.
    pub fn multiply_point3x4(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3);
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3);
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3);

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a direction (`w = 0`): rotation and scale only.
    pub fn multiply_vector(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Determinant of the upper-left 3×3 rotation/scale block.
    ///
    /// This is not the full 4×4 determinant; it is what [`Mat4::inverse`] and
    /// [`Mat4::valid_trs`] test against.
    pub fn determinant(&self) -> f32 {
        self.minor(3, 3)
    }

    /// Determinant of the 3×3 matrix left after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut block = [0.0; 9];
        let mut i = 0;
        for c in (0..4).filter(|&c| c != col) {
            for r in (0..4).filter(|&r| r != row) {
                block[i] = self.at(r, c);
                i += 1;
            }
        }
        det3(block)
    }

    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    fn determinant4(&self) -> f32 {
        (0..4).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }

    /// Product of the lengths of the first `n` columns, each taken over its
    /// first `n` rows. Bounds `|det|` of that block (Hadamard).
    fn column_norm_product(&self, n: usize) -> f32 {
        (0..n)
            .map(|col| {
                (0..n)
                    .map(|row| self.at(row, col) * self.at(row, col))
                    .sum::<f32>()
                    .sqrt()
            })
            .product()
    }

    /// Full 4×4 inverse (adjugate over determinant).
    ///
    /// Fails with [`MathError::SingularMatrix`] when the 3×3
    /// [`Mat4::determinant`] or the full determinant is within
    /// [`MAT4_EPSILON`] of zero relative to the product of the column
    /// lengths. Uniformly small scales therefore stay invertible.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let block = self.determinant();
        let full = self.determinant4();
        let block_singular = block.abs() <= MAT4_EPSILON * self.column_norm_product(3);
        let full_singular = full.abs() <= MAT4_EPSILON * self.column_norm_product(4);
        if block_singular || full_singular {
            let determinant = if block_singular { block } else { full };
            debug!(determinant, "refusing to invert singular matrix");
            return Err(MathError::SingularMatrix { determinant });
        }
        let inv_det = 1.0 / full;
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                // inverse(row, col) = cofactor(col, row) / det
                out[col * 4 + row] = self.cofactor(col, row) * inv_det;
            }
        }
        Ok(Self::new(out))
    }

    /// Diagonal `(m00, m11, m22)`.
    ///
    /// Exact only for axis-aligned transforms without shear.
    pub fn lossy_scale(&self) -> Vec3 {
        Vec3::new(self.at(0, 0), self.at(1, 1), self.at(2, 2))
    }

    /// Rotation of the upper-left block as a quaternion.
    ///
    /// Basis columns are normalized first so positive scale does not leak into
    /// the result. A zero column produces NaN.
    pub fn rotation(&self) -> Quat {
        let c0 = Vec3::new(self.at(0, 0), self.at(1, 0), self.at(2, 0)).normalized();
        let c1 = Vec3::new(self.at(0, 1), self.at(1, 1), self.at(2, 1)).normalized();
        let c2 = Vec3::new(self.at(0, 2), self.at(1, 2), self.at(2, 2)).normalized();
        Quat::from_rotation_columns(&c0, &c1, &c2)
    }

    /// Whether the matrix reads as a translate-rotate-scale composition.
    ///
    /// Requires an affine bottom row `(0, 0, 0, 1)`, a unit [`Mat4::rotation`]
    /// (no shear), and a positive [`Mat4::determinant`]. This checks; it never
    /// repairs.
    pub fn valid_trs(&self) -> bool {
        let affine = self.at(3, 0).abs() <= MAT4_EPSILON
            && self.at(3, 1).abs() <= MAT4_EPSILON
            && self.at(3, 2).abs() <= MAT4_EPSILON
            && (self.at(3, 3) - 1.0).abs() <= MAT4_EPSILON;
        let unit = (self.rotation().sqr_magnitude() - 1.0).abs() <= UNIT_NORM_EPSILON;
        affine && unit && self.determinant() > 0.0
    }

    /// Per-element comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }

    /// Approximate identity check under [`Tolerance::DEFAULT`].
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY, &Tolerance::DEFAULT)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

/// `(row, col)` access; both coordinates must be in `0..4`.
impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 4 && col < 4, "invalid matrix element ({row}, {col})");
        &self.data[row + col * 4]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && col < 4, "invalid matrix element ({row}, {col})");
        &mut self.data[row + col * 4]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.multiply_vec4(&rhs)
    }
}
