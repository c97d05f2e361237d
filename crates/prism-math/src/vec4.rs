// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::{Vec3, EPSILON};

/// Homogeneous 4D vector.
///
/// `w = 1` marks a point and `w = 0` a direction when passed through a
/// [`crate::Mat4`]. Planes reuse the layout as `(nx, ny, nz, d)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends `v` with the homogeneous coordinate `w`.
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Homogeneous point (`w = 1`).
    pub const fn point(v: Vec3) -> Self {
        Self::from_vec3(v, 1.0)
    }

    /// Homogeneous direction (`w = 0`).
    pub const fn direction(v: Vec3) -> Self {
        Self::from_vec3(v, 0.0)
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a + e, b + f, c + g, d + h)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a - e, b - f, c - g, d - h)
    }

    /// Scales every component, `w` included.
    pub fn scale(&self, scalar: f32) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a * scalar, b * scalar, c * scalar, d * scalar)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        a * e + b * f + c * g + d * h
    }

    /// Four-component length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises all four components, returning zero if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec4::add(&self, &rhs)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec4::sub(&self, &rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "[{x:5.2}, {y:5.2}, {z:5.2}, {w:5.2}]")
    }
}
