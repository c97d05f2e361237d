// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types consumed by ray queries (boxes, planes, triangles).
//!
//! Containment and overlap notes:
//! - 3D boxes use closed intervals: a point on a face is contained.
//! - `Aabb2::contains_point` is strict (interior only) while
//!   `Aabb2::overlaps` is inclusive on edges.
//! - Boxes keep `min <= max` component-wise through every constructor.

#[doc = "Axis-aligned bounding boxes in 3D."]
pub mod aabb;
#[doc = "Axis-aligned bounding boxes in 2D."]
pub mod aabb2;
#[doc = "Planes in `n·p + d = 0` form."]
pub mod plane;
#[doc = "Triangle vertex capability."]
pub mod triangle;
