// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! algebra3-core: 3D vector, quaternion, and homogeneous matrix value types.
//!
//! Every type is a small `Copy` value with pure operations. The only mutation
//! surface is explicit `&mut self` methods (`normalize`, `set`, indexed
//! writes); callers never observe shared state.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod error;
/// Host-engine interop records and explicit conversions.
pub mod host;
/// Vector, quaternion, and matrix types plus scalar helpers.
pub mod math;

pub use error::MathError;
pub use math::{Mat4, Quat, Tolerance, Vec3, Vec4};
