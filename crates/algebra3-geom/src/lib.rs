// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry built on the algebra3 value types.

This crate provides:
- Planes in Hessian normal form (`Plane`) with signed-distance queries.
- Translate/rotate/scale records (`Transform`) that convert to and from
  `Mat4`.

Design notes:
- Float32 throughout; operations favor clarity over speed.
- Degenerate input (zero normals, collinear points) is not rejected and
  propagates as NaN, matching the vector layer.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Foundational geometric types.
pub mod types;

pub use types::plane::Plane;
pub use types::transform::Transform;
