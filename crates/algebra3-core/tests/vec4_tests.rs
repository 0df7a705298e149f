// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use algebra3_core::math::{self, Tolerance, Vec3, Vec4};
use algebra3_core::MathError;

#[test]
fn vec4_accessors_and_dot() {
    let v = Vec4::from_vec3(&Vec3::new(1.0, 2.0, 3.0), 4.0);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v.xyz().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(v.w(), 4.0);
    assert_eq!(v.dot(&Vec4::new(1.0, 1.0, 1.0, 1.0)), 10.0);
    assert_eq!(v.get(3), Ok(4.0));
    assert_eq!(
        v.get(4),
        Err(MathError::VectorIndexOutOfRange { index: 4, len: 4 })
    );
}

#[test]
fn vec4_equality_is_exact() {
    let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
    let mut b = a;
    b[0] = 1e-7;
    assert_ne!(a, b);
    assert_eq!(Vec4::default(), Vec4::ZERO);
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0f32, 45.0, 90.0, 180.0, -90.0] {
        let back = math::rad_to_deg(math::deg_to_rad(deg));
        assert!((back - deg).abs() <= 1e-4, "expected {deg}, got {back}");
    }
}

#[test]
fn clamp01_limits_interpolation_factor() {
    assert_eq!(math::clamp01(-0.5), 0.0);
    assert_eq!(math::clamp01(0.5), 0.5);
    assert_eq!(math::clamp01(1.5), 1.0);
}

#[test]
fn tolerance_scales_with_magnitude() {
    let tol = Tolerance::new(1e-6, 1e-3);
    assert_eq!(tol.allowed_error(0.0), 1e-6);
    assert!(tol.approx_eq(1000.0, 1000.5));
    assert!(!tol.approx_eq(1.0, 1.01));
    assert_eq!(Tolerance::default(), Tolerance::DEFAULT);
}
