// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! prism-math: value-type math kernel for the Prism rendering pipeline.
//!
//! Covers 2D/3D/4D vectors, the 3×3 2D affine helper, and the 4×4
//! affine/projective transform with Euler composition, cofactor inversion and
//! OpenGL-style projection builders.
//!
//! Conventions:
//! - All arithmetic is `f32`.
//! - Angles at the matrix API are in degrees; [`deg_to_rad`] converts.
//! - Matrices are stored row-major and act on column vectors
//!   ([`Mat4::transform_point`]); [`Mat4::row_transform_vec4`] is the explicit
//!   row-vector counterpart.
//! - Every type is an immutable `Copy` value: composition returns a new value.

mod error;
mod euler;
mod mat3;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use euler::EulerOrder;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

use core::f32::consts::PI;

/// Degeneracy threshold used when normalising vectors.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians (`deg * π / 180`) with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * PI / 180.0
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * 180.0 / PI
}

/// Returns `true` when `a` and `b` differ by at most `tolerance`.
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}
