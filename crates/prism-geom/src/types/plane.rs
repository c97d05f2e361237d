// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use prism_math::{Vec3, Vec4};

/// Plane stored as the coefficients `(nx, ny, nz, d)` of `n·p + d = 0`.
///
/// The normal is not required to be unit length. Ray parameters computed
/// against a plane are unaffected by its scale; [`Plane::signed_distance`]
/// is only a true distance once [`Plane::normalized`] has been applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    coeffs: Vec4,
}

impl Plane {
    /// The `z = 0` plane with normal `+Z`.
    pub const XY: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Creates a plane from its four coefficients.
    pub const fn new(nx: f32, ny: f32, nz: f32, d: f32) -> Self {
        Self {
            coeffs: Vec4::new(nx, ny, nz, d),
        }
    }

    /// Plane through `point` with the given `normal`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self::from(Vec4::from_vec3(normal, -normal.dot(&point)))
    }

    /// Normal vector `(nx, ny, nz)`.
    pub const fn normal(&self) -> Vec3 {
        self.coeffs.xyz()
    }

    /// Offset term `d`.
    pub const fn d(&self) -> f32 {
        self.coeffs.w()
    }

    /// Coefficients as a homogeneous vector.
    pub const fn as_vec4(&self) -> Vec4 {
        self.coeffs
    }

    /// Evaluates `n·p + d`.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.coeffs.dot(&Vec4::point(point))
    }

    /// Rescales the coefficients so the normal has unit length.
    ///
    /// A plane with a zero normal is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.normal().length();
        if len == 0.0 {
            return *self;
        }
        Self::from(self.coeffs.scale(1.0 / len))
    }
}

impl From<Vec4> for Plane {
    fn from(coeffs: Vec4) -> Self {
        Self { coeffs }
    }
}

impl From<Plane> for Vec4 {
    fn from(plane: Plane) -> Self {
        plane.coeffs
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plane {}", self.coeffs)
    }
}
