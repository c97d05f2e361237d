// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Geometry queries for Prism.

This crate provides:
- Rays with plane, triangle and bounding-box intersection (`Ray`, `RayHit`).
- Planes in `n·p + d = 0` form (`Plane`).
- The `Triangle3` vertex capability and a plain `Triangle`.
- Axis-aligned bounding boxes in 3D (`Aabb3`) and 2D (`Aabb2`).

Design notes:
- Every type is an immutable `Copy` value except the `expand_to*` growers on
  the bounding boxes, which widen in place.
- Float32 throughout; degenerate inputs (parallel rays, zero-area triangles,
  axis-parallel slab tests) are defined outcomes, never panics.
- Rejections are reported at `trace` level through `tracing`; no subscriber is
  installed here.
"]

mod error;
/// Ray construction and intersection queries.
pub mod ray;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use ray::{Ray, RayHit};
pub use types::aabb::Aabb3;
pub use types::aabb2::Aabb2;
pub use types::plane::Plane;
pub use types::triangle::{Triangle, Triangle3};
