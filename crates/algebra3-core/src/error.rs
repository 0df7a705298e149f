// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Failures reported by the fallible math operations.
///
/// Only index validation, matrix inversion, TRS decomposition, and host buffer
/// casts can fail. Degenerate numeric input (zero-length normalize, antipodal
/// slerp) is not an error: it propagates as NaN/Infinity.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Flat matrix index outside `0..16`.
    #[error("invalid matrix index {index} (expected 0..16)")]
    IndexOutOfRange {
        /// Offending flat index.
        index: usize,
    },

    /// Matrix `(row, col)` pair with either coordinate outside `0..4`.
    #[error("invalid matrix element ({row}, {col}) (expected 0..4)")]
    ElementOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Column number outside `0..4`.
    #[error("invalid column number {0}")]
    ColumnOutOfRange(usize),

    /// Row number outside `0..4`.
    #[error("invalid row number {0}")]
    RowOutOfRange(usize),

    /// Vector component index outside `0..len`.
    #[error("invalid vector component {index} (expected 0..{len})")]
    VectorIndexOutOfRange {
        /// Requested component.
        index: usize,
        /// Number of components of the vector type.
        len: usize,
    },

    /// The matrix cannot be inverted.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that fell inside the singularity threshold.
        determinant: f32,
    },

    /// The matrix is not a translate-rotate-scale composition.
    #[error("matrix is not a valid TRS transform")]
    NotTrs,

    /// A host buffer could not be reinterpreted as host records.
    #[error("host buffer cast failed: {0}")]
    HostCast(#[from] bytemuck::PodCastError),
}
