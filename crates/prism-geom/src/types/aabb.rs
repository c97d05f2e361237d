// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use prism_math::{Mat4, Vec3};

use crate::{GeomError, Ray};

/// Axis-aligned bounding box in 3D.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Intervals are closed: points on a face are inside.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Aabb3 {
    min: Vec3,
    max: Vec3,
}

impl Aabb3 {
    /// Degenerate box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Constructs the box spanned by two opposite corners, in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Builds a box centered at `origin` with full extents `size`.
    pub fn from_origin(origin: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::from_corners(origin - half, origin + half)
    }

    /// Builds the minimal box that contains all `vertices`.
    ///
    /// # Errors
    /// Returns [`GeomError::EmptyVertexSet`] when `vertices` is empty.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = vertices.split_first().ok_or(GeomError::EmptyVertexSet)?;
        let mut bbox = Self {
            min: *first,
            max: *first,
        };
        bbox.expand_to(rest.iter().copied());
        Ok(bbox)
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Full extents `max - min`.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn origin(&self) -> Vec3 {
        self.min + self.size() * 0.5
    }

    /// Widens the box in place until it contains every point.
    pub fn expand_to<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vec3>,
    {
        for p in points {
            self.min = self.min.min(&p);
            self.max = self.max.max(&p);
        }
    }

    /// Widens the box in place until it contains `other`.
    pub fn expand_to_box(&mut self, other: &Self) {
        self.expand_to([other.min, other.max]);
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let [x, y, z] = point.to_array();
        let [ax, ay, az] = self.min.to_array();
        let [bx, by, bz] = self.max.to_array();
        (ax..=bx).contains(&x) && (ay..=by).contains(&y) && (az..=bz).contains(&z)
    }

    /// Returns `true` if both corners of `other` are contained.
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        (0..3).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
    }

    /// Returns `true` if `ray` hits the box; see [`Ray::intersects_bounding_box`].
    pub fn intersects(&self, ray: &Ray) -> bool {
        ray.intersects_bounding_box(self).is_some()
    }

    /// Entry parameter of `ray` into the box, if it hits.
    pub fn intersection_distance(&self, ray: &Ray) -> Option<f32> {
        ray.intersects_bounding_box(self)
    }

    /// Returns the union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` on every side.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::from_corners(self.min - delta, self.max + delta)
    }

    /// Computes the box that bounds this one after transformation by `mat`.
    ///
    /// Evaluates the eight corners under [`Mat4::transform_point`] and bounds
    /// the results.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        let first = mat.transform_point(&corners[0]);
        let mut out = Self {
            min: first,
            max: first,
        };
        out.expand_to(corners[1..].iter().map(|c| mat.transform_point(c)));
        out
    }
}

impl fmt::Display for Aabb3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
