// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::RangeBounds;

use prism_math::{Vec3, Vec4};
use tracing::trace;

use crate::{Aabb3, Plane, Triangle3};

/// Half-line `origin + t * direction`.
///
/// The unit direction is computed once at construction and cannot drift from
/// `direction` because the fields are private.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    unit_direction: Vec3,
}

/// Result of a ray-surface intersection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit {
    /// Parameter along the ray where the intersection occurs.
    pub t: f32,
    /// Intersection point.
    pub point: Vec3,
}

impl Ray {
    /// Creates a ray and caches its unit direction.
    ///
    /// The unit direction is `direction / |direction|` for any nonzero
    /// length, however short. Only an exactly zero `direction` yields a zero
    /// unit direction; such a ray never hits a triangle.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let len = direction.length();
        let unit_direction = if len == 0.0 {
            Vec3::ZERO
        } else {
            direction * (1.0 / len)
        };
        Self {
            origin,
            direction,
            unit_direction,
        }
    }

    /// Start point.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Direction as given to [`Ray::new`].
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit-length direction (zero for a zero direction).
    pub fn normalized_direction(&self) -> Vec3 {
        self.unit_direction
    }

    /// Evaluates the ray at parameter `t`: `origin + t * direction`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersects the infinite line with `plane`, measuring `t` in units of
    /// the un-normalised direction.
    ///
    /// A ray parallel to the plane reports `t = 0` and the origin as the hit
    /// point; use [`Ray::intersects_plane`] to filter on `t`.
    pub fn plane_hit(&self, plane: &Plane) -> RayHit {
        let coeffs = plane.as_vec4();
        let facing = coeffs.dot(&Vec4::direction(self.direction));
        let t = if facing == 0.0 {
            0.0
        } else {
            -coeffs.dot(&Vec4::point(self.origin)) / facing
        };
        RayHit {
            t,
            point: self.at(t),
        }
    }

    /// Plane intersection strictly in front of the origin (`t > 0`).
    ///
    /// # Examples
    /// ```
    /// use prism_geom::{Plane, Ray};
    /// use prism_math::Vec3;
    /// let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    /// let hit = ray.intersects_plane(&Plane::XY).map(|h| h.t);
    /// assert_eq!(hit, Some(5.0));
    /// ```
    pub fn intersects_plane(&self, plane: &Plane) -> Option<RayHit> {
        let hit = self.plane_hit(plane);
        (hit.t > 0.0).then_some(hit)
    }

    /// Triangle intersection with `t >= 0` and no upper bound.
    pub fn intersects_triangle<T>(&self, triangle: &T) -> Option<RayHit>
    where
        T: Triangle3 + ?Sized,
    {
        self.intersects_triangle_within(triangle, 0.0..)
    }

    /// Triangle intersection restricted to parameters in `range`.
    ///
    /// `t` is measured along the normalised direction, so it is a true
    /// distance. The hit must lie on the inner side of all three edges
    /// (boundary included) with respect to the face normal
    /// `(v2 - v1) × (v3 - v2)`, so either winding is accepted. Degenerate
    /// triangles and rays parallel to the triangle's plane miss.
    pub fn intersects_triangle_within<T, R>(&self, triangle: &T, range: R) -> Option<RayHit>
    where
        T: Triangle3 + ?Sized,
        R: RangeBounds<f32>,
    {
        let (v1, v2, v3) = (triangle.v1(), triangle.v2(), triangle.v3());
        let normal = triangle.face_normal();
        if normal.length() == 0.0 {
            trace!("degenerate triangle rejected");
            return None;
        }

        let plane = Plane::from_normal_and_point(normal, v1).normalized();
        let t = -plane.signed_distance(self.origin) / plane.normal().dot(&self.unit_direction);
        if !t.is_finite() {
            trace!(t, "ray parallel to triangle plane");
            return None;
        }
        if !range.contains(&t) {
            trace!(t, "triangle hit outside parameter range");
            return None;
        }

        let point = self.origin + self.unit_direction * t;
        for (a, b) in [(v1, v2), (v2, v3), (v3, v1)] {
            if normal.dot(&(b - a).cross(&(point - a))) < 0.0 {
                trace!(t, "plane hit outside triangle");
                return None;
            }
        }
        Some(RayHit { t, point })
    }

    /// Slab-method entry and exit parameters against `bbox`.
    ///
    /// Parameters are in units of the un-normalised direction. An axis whose
    /// direction component is zero constrains nothing when the origin lies
    /// within that slab and empties the interval otherwise. An empty result
    /// has `tmin > tmax`.
    pub fn slab_interval(&self, bbox: &Aabb3) -> (f32, f32) {
        let origin = self.origin.to_array();
        let dir = self.direction.to_array();
        let lo = bbox.min().to_array();
        let hi = bbox.max().to_array();

        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        for axis in 0..3 {
            if dir[axis] == 0.0 {
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return (f32::INFINITY, f32::NEG_INFINITY);
                }
                continue;
            }
            let inv = 1.0 / dir[axis];
            let t1 = (lo[axis] - origin[axis]) * inv;
            let t2 = (hi[axis] - origin[axis]) * inv;
            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
        }
        (tmin, tmax)
    }

    /// Entry parameter into `bbox`, or `None` on a miss.
    ///
    /// Misses when the box lies entirely behind the origin (`tmax < 0`) or the
    /// slabs do not overlap. The returned value is negative when the origin is
    /// inside the box.
    pub fn intersects_bounding_box(&self, bbox: &Aabb3) -> Option<f32> {
        let (tmin, tmax) = self.slab_interval(bbox);
        if tmax < 0.0 || tmin > tmax {
            return None;
        }
        Some(tmin)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb3 {
        Aabb3::from_corners(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn at_scales_unnormalised_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(1.5), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(ray.normalized_direction(), Vec3::UNIT_X);
    }

    #[test]
    fn zero_direction_normalises_to_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.normalized_direction(), Vec3::ZERO);
    }

    #[test]
    fn short_direction_still_normalises() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, -1e-7));
        let unit = ray.normalized_direction();
        assert!(unit.distance(&Vec3::new(0.0, 0.0, -1.0)) <= 1e-6, "{unit}");
    }

    #[test]
    fn parallel_plane_hit_reports_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::UNIT_X);
        let hit = ray.plane_hit(&Plane::XY);
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.point, ray.origin());
        assert!(ray.intersects_plane(&Plane::XY).is_none());
    }

    #[test]
    fn plane_behind_origin_is_rejected() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::UNIT_Z);
        assert!(ray.plane_hit(&Plane::XY).t < 0.0);
        assert!(ray.intersects_plane(&Plane::XY).is_none());
    }

    #[test]
    fn slab_entry_distance_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::UNIT_Z);
        assert_eq!(ray.slab_interval(&unit_box()), (4.0, 6.0));
        assert_eq!(ray.intersects_bounding_box(&unit_box()), Some(4.0));
    }

    #[test]
    fn axis_parallel_ray_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, -5.0), Vec3::UNIT_Z);
        let (tmin, tmax) = ray.slab_interval(&unit_box());
        assert!(tmin > tmax);
        assert!(ray.intersects_bounding_box(&unit_box()).is_none());
    }

    #[test]
    fn origin_inside_box_gives_negative_entry() {
        let ray = Ray::new(Vec3::ZERO, Vec3::UNIT_X);
        assert_eq!(ray.intersects_bounding_box(&unit_box()), Some(-1.0));
    }

    #[test]
    fn display_shows_origin_and_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::UNIT_Z);
        assert_eq!(
            ray.to_string(),
            "[ 0.00,  0.00,  0.00] -> [ 0.00,  0.00,  1.00]"
        );
    }
}
