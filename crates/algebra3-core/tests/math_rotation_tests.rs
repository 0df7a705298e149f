// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use algebra3_core::math::{deg_to_rad, Mat4, Quat, Tolerance, Vec3};

const TOL: Tolerance = Tolerance::new(1e-5, 1e-5);

const EULER_CASES: [(f32, f32, f32); 4] = [
    (15.0, -40.0, 120.0),
    (-75.0, 33.0, 10.0),
    (170.0, 5.0, -95.0),
    (0.5, 89.0, 45.0),
];

fn assert_mat_near(actual: Mat4, expected: Mat4) {
    assert!(
        actual.approx_eq(&expected, &TOL),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn euler_matches_composed_angle_axis_products() {
    for (x, y, z) in EULER_CASES {
        let composed = Quat::angle_axis(z, Vec3::UNIT_Z)
            * Quat::angle_axis(y, Vec3::UNIT_Y)
            * Quat::angle_axis(x, Vec3::UNIT_X);
        assert_mat_near(
            Mat4::rotate(&Quat::euler(x, y, z)),
            Mat4::rotate(&composed),
        );
    }
}

#[test]
fn euler_matches_axis_matrix_product() {
    for (x, y, z) in EULER_CASES {
        let product = Mat4::rotation_z(deg_to_rad(z))
            * Mat4::rotation_y(deg_to_rad(y))
            * Mat4::rotation_x(deg_to_rad(x));
        assert_mat_near(Mat4::rotate(&Quat::euler(x, y, z)), product);
    }
}

#[test]
fn euler_applies_x_before_z() {
    // X first sends UP to FORWARD; Z then leaves FORWARD alone.
    let v = Quat::euler(90.0, 0.0, 90.0) * Vec3::UP;
    assert_eq!(v, Vec3::FORWARD);
    let m = Mat4::rotate(&Quat::euler(90.0, 0.0, 90.0));
    assert_eq!(m.multiply_vector(&Vec3::UP), Vec3::FORWARD);
}

#[test]
fn diagonal_third_turn_cycles_axes() {
    let axis = Vec3::new(1.0, 1.0, 1.0);
    let m = Mat4::rotation_axis_angle(axis, deg_to_rad(120.0));
    assert_eq!(m.multiply_vector(&Vec3::UNIT_X), Vec3::UNIT_Y);
    assert_eq!(m.multiply_vector(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(m.multiply_vector(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(m.multiply_vector(&axis), axis);
}

#[test]
fn angles_about_one_axis_add() {
    let axis = Vec3::new(0.3, -1.0, 0.6);
    let split = Quat::angle_axis(25.0, axis) * Quat::angle_axis(50.0, axis);
    assert_mat_near(
        Mat4::rotate(&split),
        Mat4::rotate(&Quat::angle_axis(75.0, axis)),
    );
    assert_mat_near(
        Mat4::rotate(&split),
        Mat4::rotation_axis_angle(axis, deg_to_rad(75.0)),
    );
}

#[test]
fn zero_axis_rotation_is_identity() {
    assert_eq!(Mat4::rotation_axis_angle(Vec3::ZERO, 1.0), Mat4::IDENTITY);
}
