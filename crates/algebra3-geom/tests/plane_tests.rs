// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use algebra3_core::math::Vec3;
use algebra3_geom::Plane;
use proptest::prelude::*;

fn floor_at_five() -> Plane {
    Plane::from_normal_and_point(Vec3::UP, Vec3::new(0.0, 5.0, 0.0))
}

#[test]
fn signed_distance_and_side() {
    let plane = floor_at_five();
    assert_eq!(plane.get_distance_to_point(&Vec3::new(0.0, 10.0, 0.0)), 5.0);
    assert_eq!(plane.get_distance_to_point(&Vec3::ZERO), -5.0);
    assert!(plane.get_side(&Vec3::new(0.0, 10.0, 0.0)));
    assert!(!plane.get_side(&Vec3::ZERO));
    // On the plane is not the positive side.
    assert!(!plane.get_side(&Vec3::new(3.0, 5.0, -1.0)));
}

#[test]
fn constructors_normalize_the_normal() {
    let plane = Plane::from_normal_and_point(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(plane.normal(), Vec3::UP);
    assert_eq!(plane.distance(), -5.0);

    let by_distance = Plane::from_normal_and_distance(Vec3::new(0.0, 0.0, 4.0), 3.0);
    assert_eq!(by_distance.normal(), Vec3::FORWARD);
    assert_eq!(by_distance.distance(), 3.0);
}

#[test]
fn three_points_follow_winding() {
    let a = Vec3::new(0.0, 2.0, 0.0);
    let b = Vec3::new(1.0, 2.0, 0.0);
    let c = Vec3::new(0.0, 2.0, -1.0);
    let plane = Plane::from_3_points(a, b, c);
    assert_eq!(plane.normal(), Vec3::UP);
    assert_eq!(plane.distance(), -2.0);

    // Reversed winding faces the other way.
    let reversed = Plane::from_3_points(a, c, b);
    assert_eq!(reversed.normal(), Vec3::DOWN);
    assert_eq!(reversed.distance(), 2.0);
}

#[test]
fn same_side_treats_on_plane_as_negative() {
    let plane = floor_at_five();
    let above = Vec3::new(0.0, 10.0, 0.0);
    let also_above = Vec3::new(3.0, 7.0, 1.0);
    let below = Vec3::ZERO;
    let on = Vec3::new(1.0, 5.0, 0.0);
    assert!(plane.same_side(&above, &also_above));
    assert!(!plane.same_side(&above, &below));
    assert!(plane.same_side(&on, &below));
    assert!(!plane.same_side(&on, &above));
}

#[test]
fn closest_point_projects_onto_plane() {
    let plane = floor_at_five();
    let p = Vec3::new(3.0, 10.0, -2.0);
    assert_eq!(plane.closest_point_on_plane(&p), Vec3::new(3.0, 5.0, -2.0));
    let q = Vec3::new(-1.0, -4.0, 8.0);
    assert_eq!(plane.closest_point_on_plane(&q), Vec3::new(-1.0, 5.0, 8.0));
}

#[test]
fn flip_reverses_orientation_only() {
    let mut plane = floor_at_five();
    let flipped = plane.flipped();
    plane.flip();
    assert_eq!(plane, flipped);
    assert_eq!(plane.normal(), Vec3::DOWN);
    assert_eq!(plane.distance(), 5.0);
    assert_eq!(plane.get_distance_to_point(&Vec3::new(0.0, 10.0, 0.0)), -5.0);
    // Same point set.
    assert_eq!(plane.get_distance_to_point(&Vec3::new(7.0, 5.0, 7.0)), 0.0);
}

#[test]
fn translate_moves_the_plane_with_its_points() {
    let plane = floor_at_five();
    let up_three = Vec3::new(0.0, 3.0, 0.0);

    let moved = Plane::translated(&plane, &up_three);
    assert_eq!(moved.distance(), -8.0);
    assert_eq!(moved.get_distance_to_point(&Vec3::new(0.0, 8.0, 0.0)), 0.0);

    let mut in_place = plane;
    in_place.translate(&up_three);
    assert_eq!(in_place, moved);

    // Sliding along the plane changes nothing.
    let slid = Plane::translated(&plane, &Vec3::new(4.0, 0.0, 1.0));
    assert_eq!(slid, plane);
}

#[test]
fn setters_rederive_in_place() {
    let mut plane = floor_at_five();
    plane.set_normal(Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(plane.normal(), Vec3::RIGHT);
    assert_eq!(plane.distance(), -5.0);

    plane.set_distance(1.0);
    assert_eq!(plane.get_distance_to_point(&Vec3::ZERO), 1.0);

    plane.set_normal_and_position(Vec3::FORWARD, Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(plane.normal(), Vec3::FORWARD);
    assert_eq!(plane.distance(), 2.0);

    plane.set_3_points(
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, -1.0),
    );
    assert_eq!(plane.normal(), Vec3::UP);
    assert_eq!(plane.distance(), -2.0);
}

#[test]
fn zero_normal_propagates_nan() {
    let plane = Plane::from_normal_and_point(Vec3::ZERO, Vec3::ONE);
    assert!(plane.normal().x().is_nan());
    assert!(plane.get_distance_to_point(&Vec3::ONE).is_nan());

    let collinear = Plane::from_3_points(Vec3::ZERO, Vec3::RIGHT, Vec3::new(2.0, 0.0, 0.0));
    assert!(collinear.distance().is_nan());
}

fn small_vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-10.0f32..10.0).prop_map(Vec3::from)
}

proptest! {
    #[test]
    fn closest_point_lies_on_plane(
        normal in small_vec3(),
        anchor in small_vec3(),
        point in small_vec3(),
    ) {
        prop_assume!(normal.magnitude() > 0.1);
        let plane = Plane::from_normal_and_point(normal, anchor);
        let closest = plane.closest_point_on_plane(&point);
        prop_assert!(plane.get_distance_to_point(&closest).abs() < 1e-4);
    }

    #[test]
    fn flipped_negates_signed_distance(
        normal in small_vec3(),
        anchor in small_vec3(),
        point in small_vec3(),
    ) {
        prop_assume!(normal.magnitude() > 0.1);
        let plane = Plane::from_normal_and_point(normal, anchor);
        let d = plane.get_distance_to_point(&point);
        let flipped = plane.flipped().get_distance_to_point(&point);
        prop_assert!((d + flipped).abs() < 1e-5);
    }
}
