// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host-engine interop records.
//!
//! A rendering/animation host exchanges vectors and rotations as plain
//! `#[repr(C)]` float records. These types mirror that layout so packed host
//! buffers can be viewed without copying, and every conversion to or from the
//! library types is an explicitly named function. Nothing converts implicitly.
//!
//! All records derive `bytemuck::Pod` and `bytemuck::Zeroable` for safe
//! reinterpretation without unsafe code.

use bytemuck::{Pod, Zeroable};

use crate::math::{Quat, Vec3, Vec4};
use crate::MathError;

/// Host 2D vector `(x, y)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HostVector2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

const _: () = assert!(std::mem::size_of::<HostVector2>() == 8);

/// Host 3D vector `(x, y, z)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HostVector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

const _: () = assert!(std::mem::size_of::<HostVector3>() == 12);

/// Host homogeneous vector `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HostVector4 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W component.
    pub w: f32,
}

const _: () = assert!(std::mem::size_of::<HostVector4>() == 16);

/// Host quaternion `(x, y, z, w)`, scalar last.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HostQuaternion {
    /// X (imaginary) component.
    pub x: f32,
    /// Y (imaginary) component.
    pub y: f32,
    /// Z (imaginary) component.
    pub z: f32,
    /// W (real) component.
    pub w: f32,
}

const _: () = assert!(std::mem::size_of::<HostQuaternion>() == 16);

impl Vec3 {
    /// Converts to the host 3D vector record.
    pub fn to_host_vector3(&self) -> HostVector3 {
        HostVector3 {
            x: self.x(),
            y: self.y(),
            z: self.z(),
        }
    }

    /// Converts from the host 3D vector record.
    pub fn from_host_vector3(v: &HostVector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts to the host 2D vector record, dropping `z`.
    pub fn to_host_vector2(&self) -> HostVector2 {
        HostVector2 {
            x: self.x(),
            y: self.y(),
        }
    }

    /// Converts from the host 2D vector record with `z = 0`.
    pub fn from_host_vector2(v: &HostVector2) -> Self {
        Self::from_xy(v.x, v.y)
    }
}

impl Vec4 {
    /// Converts to the host 4D vector record.
    pub fn to_host_vector4(&self) -> HostVector4 {
        HostVector4 {
            x: self.x(),
            y: self.y(),
            z: self.z(),
            w: self.w(),
        }
    }

    /// Converts from the host 4D vector record.
    pub fn from_host_vector4(v: &HostVector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Quat {
    /// Converts to the host quaternion record.
    pub fn to_host_quaternion(&self) -> HostQuaternion {
        HostQuaternion {
            x: self.x(),
            y: self.y(),
            z: self.z(),
            w: self.w(),
        }
    }

    /// Converts from the host quaternion record; components are taken verbatim.
    pub fn from_host_quaternion(q: &HostQuaternion) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

/// Views a packed `[x, y, z, x, y, z, ...]` host buffer as 3D vector records.
///
/// # Errors
///
/// Returns [`MathError::HostCast`] when the length is not a multiple of three
/// floats.
pub fn cast_vector3_slice(floats: &[f32]) -> Result<&[HostVector3], MathError> {
    Ok(bytemuck::try_cast_slice(floats)?)
}

/// Views a packed `[x, y, z, w, ...]` host buffer as quaternion records.
///
/// # Errors
///
/// Returns [`MathError::HostCast`] when the length is not a multiple of four
/// floats.
pub fn cast_quaternion_slice(floats: &[f32]) -> Result<&[HostQuaternion], MathError> {
    Ok(bytemuck::try_cast_slice(floats)?)
}
