// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry types layered over the core math (plane, transform).
//!
//! Plane queries use the signed distance `dot(normal, p) + distance`; points
//! on the side the normal faces are positive.

#[doc = "Planes stored as a unit normal and a signed distance."]
pub mod plane;
#[doc = "Translate/rotate/scale transforms with non-uniform scale."]
pub mod transform;
