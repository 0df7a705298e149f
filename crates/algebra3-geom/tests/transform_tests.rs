// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use algebra3_core::math::{Mat4, Quat, Tolerance, Vec3};
use algebra3_core::MathError;
use algebra3_geom::Transform;

const TOL: Tolerance = Tolerance::new(1e-5, 1e-5);

fn sample() -> Transform {
    Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::euler(10.0, 20.0, 30.0),
        Vec3::new(2.0, 0.5, 1.5),
    )
}

#[test]
fn identity_maps_to_identity_matrix() {
    let id = Transform::identity();
    assert_eq!(id, Transform::default());
    assert!(id.to_mat4().is_identity());
    assert_eq!(id.transform_point(&Vec3::new(4.0, 5.0, 6.0)), Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn to_mat4_is_trs() {
    let t = sample();
    assert_eq!(
        t.to_mat4(),
        Mat4::trs(t.translation(), t.rotation(), t.scale())
    );
}

#[test]
fn point_and_direction_agree_with_matrix() {
    let t = sample();
    let m = t.to_mat4();
    let p = Vec3::new(-1.0, 0.5, 2.0);
    assert_eq!(t.transform_point(&p), m.multiply_point(&p));
    assert_eq!(t.transform_direction(&p), m.multiply_vector(&p));
}

#[test]
fn non_unit_rotation_agrees_with_matrix() {
    let t = Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::new(0.0, 0.0, 0.0, 2.0),
        Vec3::new(2.0, 0.5, 1.5),
    );
    let m = t.to_mat4();
    let p = Vec3::new(-1.0, 0.5, 2.0);
    assert_eq!(t.transform_point(&p), m.multiply_point(&p));
    assert_eq!(t.transform_direction(&p), m.multiply_vector(&p));
}

#[test]
fn direction_ignores_translation() {
    let t = Transform::new(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY, Vec3::ONE);
    assert_eq!(t.transform_direction(&Vec3::UP), Vec3::UP);
    assert_eq!(t.transform_point(&Vec3::UP), Vec3::new(10.0, 1.0, 0.0));
}

#[test]
fn from_mat4_recovers_parts() {
    let original = sample();
    let back = Transform::from_mat4(&original.to_mat4()).expect("valid TRS");
    assert!(back.translation().approx_eq(&original.translation(), &TOL));
    assert!(back.scale().approx_eq(&original.scale(), &TOL));
    let q = back.rotation();
    let expected = original.rotation();
    assert!(
        q.approx_eq(&expected, &TOL) || q.approx_eq(&-expected, &TOL),
        "expected {expected:?}, got {q:?}"
    );
}

#[test]
fn from_mat4_rejects_non_trs() {
    let mirror = Mat4::scale(Vec3::new(-1.0, 1.0, 1.0));
    assert_eq!(Transform::from_mat4(&mirror), Err(MathError::NotTrs));

    let mut projective = Mat4::IDENTITY;
    projective[(3, 2)] = 1.0;
    assert_eq!(Transform::from_mat4(&projective), Err(MathError::NotTrs));

    let flat = Mat4::scale(Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(Transform::from_mat4(&flat), Err(MathError::NotTrs));
}

#[test]
fn inverse_transform_point_round_trips() {
    let t = sample();
    let local = Vec3::new(0.25, -1.0, 0.75);
    let world = t.transform_point(&local);
    let back = t.inverse_transform_point(&world).expect("invertible");
    assert_eq!(back, local);
}

#[test]
fn inverse_transform_point_fails_for_zero_scale() {
    let t = Transform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::new(1.0, 0.0, 1.0));
    assert!(matches!(
        t.inverse_transform_point(&Vec3::ONE),
        Err(MathError::SingularMatrix { .. })
    ));
}
