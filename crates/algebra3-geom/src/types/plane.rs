// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use algebra3_core::math::Vec3;

/// Infinite plane `dot(normal, p) + distance = 0`.
///
/// Conventions:
/// - `normal` is stored normalized by every constructor and setter.
/// - `distance` is the signed offset from the origin; it is positive when the
///   origin lies on the negative side of the plane.
/// - Points on the side `normal` faces have a positive signed distance.
///
/// A zero-length normal (or three collinear points) is not rejected; the
/// stored normal becomes NaN and every query follows.
///
/// # Examples
/// ```
/// use algebra3_core::math::Vec3;
/// use algebra3_geom::Plane;
/// let floor = Plane::from_normal_and_point(Vec3::UP, Vec3::new(0.0, 5.0, 0.0));
/// assert_eq!(floor.get_distance_to_point(&Vec3::new(0.0, 10.0, 0.0)), 5.0);
/// assert!(floor.get_side(&Vec3::new(0.0, 10.0, 0.0)));
/// assert!(!floor.get_side(&Vec3::ZERO));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Plane through `point` facing `normal`.
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalized();
        Self {
            normal,
            distance: -normal.dot(&point),
        }
    }

    /// Plane from a normal and a signed distance taken verbatim.
    #[must_use]
    pub fn from_normal_and_distance(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// Plane through three points; the normal follows `(b - a) × (c - a)`.
    #[must_use]
    pub fn from_3_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(&(c - a));
        Self::from_normal_and_point(normal, a)
    }

    /// Unit normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance from the origin.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Replaces the normal (normalized on the way in); distance is kept.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal.normalized();
    }

    /// Replaces the signed distance.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Signed distance from the plane to `point`.
    #[must_use]
    pub fn get_distance_to_point(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Whether `point` lies strictly on the side the normal faces.
    #[must_use]
    pub fn get_side(&self, point: &Vec3) -> bool {
        self.get_distance_to_point(point) > 0.0
    }

    /// Whether both points fall on the same side.
    ///
    /// A point exactly on the plane counts as the negative side.
    #[must_use]
    pub fn same_side(&self, p0: &Vec3, p1: &Vec3) -> bool {
        self.get_side(p0) == self.get_side(p1)
    }

    /// Projection of `point` onto the plane.
    #[must_use]
    pub fn closest_point_on_plane(&self, point: &Vec3) -> Vec3 {
        *point - self.normal * self.get_distance_to_point(point)
    }

    /// Reverses orientation in place; the point set is unchanged.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.distance = -self.distance;
    }

    /// Copy of the plane facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Copy of `plane` with every point moved by `translation`.
    #[must_use]
    pub fn translated(plane: &Self, translation: &Vec3) -> Self {
        Self {
            normal: plane.normal,
            distance: plane.distance - plane.normal.dot(translation),
        }
    }

    /// Moves the plane by `translation` in place.
    pub fn translate(&mut self, translation: &Vec3) {
        *self = Self::translated(self, translation);
    }

    /// Re-derives the plane from three points, as [`Plane::from_3_points`].
    pub fn set_3_points(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        *self = Self::from_3_points(a, b, c);
    }

    /// Re-derives the plane from a normal and a point, as
    /// [`Plane::from_normal_and_point`].
    pub fn set_normal_and_position(&mut self, normal: Vec3, point: Vec3) {
        *self = Self::from_normal_and_point(normal, point);
    }
}
