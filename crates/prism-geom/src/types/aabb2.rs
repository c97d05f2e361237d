// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Sub};

use prism_math::Vec2;

use crate::GeomError;

/// Axis-aligned bounding box in 2D.
///
/// Keeps `min <= max` component-wise. Used for screen-space and texture-space
/// extents.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    /// Creates a box from scalar bounds, swapping any inverted pair.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::from_corners(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Constructs the box spanned by two opposite corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Builds the minimal box that contains all `points`.
    ///
    /// # Errors
    /// Returns [`GeomError::EmptyVertexSet`] when `points` is empty.
    pub fn from_points(points: &[Vec2]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyVertexSet)?;
        let mut bbox = Self::from_corners(*first, *first);
        bbox.expand_to(rest.iter().copied());
        Ok(bbox)
    }

    /// Bounds of a triangle's three vertices.
    pub fn from_triangle(v1: Vec2, v2: Vec2, v3: Vec2) -> Self {
        let mut bbox = Self::from_corners(v1, v2);
        bbox.expand_to([v3]);
        bbox
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.max.x() - self.min.x()
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.max.y() - self.min.y()
    }

    /// Full extents `max - min`.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center point.
    pub fn origin(&self) -> Vec2 {
        self.min + self.size() * 0.5
    }

    /// Widens the box in place until it contains every point.
    pub fn expand_to<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vec2>,
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

    /// Grows the total width by `x` and height by `y`, split evenly between
    /// opposite sides.
    pub fn inflate(&self, x: f32, y: f32) -> Self {
        let half = Vec2::new(x, y) * 0.5;
        Self::from_corners(self.min - half, self.max + half)
    }

    /// Returns `true` if the boxes overlap or touch.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max.x() >= other.min.x()
            && self.min.x() <= other.max.x()
            && self.max.y() >= other.min.y()
            && self.min.y() <= other.max.y()
    }

    /// Returns `true` if `point` lies strictly inside; edges are excluded.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x() > self.min.x()
            && point.x() < self.max.x()
            && point.y() > self.min.y()
            && point.y() < self.max.y()
    }

    /// Box translated by `delta`.
    pub fn offset(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Box with both corners multiplied by `factor`.
    ///
    /// A negative factor mirrors the box; corners are reordered to keep
    /// `min <= max`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::from_corners(self.min * factor, self.max * factor)
    }
}

impl Add<Vec2> for Aabb2 {
    type Output = Self;
    fn add(self, rhs: Vec2) -> Self::Output {
        self.offset(rhs)
    }
}

impl Sub<Vec2> for Aabb2 {
    type Output = Self;
    fn sub(self, rhs: Vec2) -> Self::Output {
        self.offset(-rhs)
    }
}

impl Mul<f32> for Aabb2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl fmt::Display for Aabb2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
