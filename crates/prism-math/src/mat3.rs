// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use tracing::debug;

use crate::{deg_to_rad, Vec2};

/// Row-major 3×3 matrix for 2D affine transforms.
///
/// Same conventions as [`crate::Mat4`]: column vectors, translation in the
/// last column, builders post-multiply and return a new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::identity();

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a matrix from row-major array data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Rotation matrix (`degrees`, counter-clockwise).
    pub fn rotation(degrees: f32) -> Self {
        Self::identity().rotate(degrees)
    }

    /// Translation matrix.
    pub fn translation(x: f32, y: f32) -> Self {
        Self::identity().translate(x, y)
    }

    /// Scale matrix.
    pub fn scaling(x: f32, y: f32) -> Self {
        Self::identity().scale(x, y)
    }

    /// Returns the matrix as a row‑major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// Post-multiplies by a rotation of `degrees`.
    pub fn rotate(self, degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut out = self.data;
        for row in 0..3 {
            let a = self.at(row, 0);
            let b = self.at(row, 1);
            out[row * 3] = a * c + b * s;
            out[row * 3 + 1] = a * -s + b * c;
        }
        Self::new(out.map(|v| v + 0.0))
    }

    /// Post-multiplies by a translation.
    pub fn translate(self, x: f32, y: f32) -> Self {
        let mut out = self.data;
        for row in 0..3 {
            out[row * 3 + 2] += self.at(row, 0) * x + self.at(row, 1) * y;
        }
        Self::new(out)
    }

    /// Post-multiplies by a scale.
    pub fn scale(self, x: f32, y: f32) -> Self {
        let mut out = self.data;
        for row in 0..2 {
            out[row * 3] *= x;
            out[row * 3 + 1] *= y;
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = (0..3).map(|k| self.at(row, k) * rhs.at(k, col)).sum::<f32>();
            }
        }
        Self::new(out)
    }

    /// Determinant (rule of Sarrus).
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        a * e * i - a * f * h + b * f * g - b * d * i + c * d * h - c * e * g
    }

    /// Inverse, or `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let [a, b, c, d, e, f, g, h, i] = self.data;
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self::new([
            (e * i - f * h) * inv,
            (c * h - b * i) * inv,
            (b * f - c * e) * inv,
            (f * g - d * i) * inv,
            (a * i - c * g) * inv,
            (c * d - a * f) * inv,
            (d * h - e * g) * inv,
            (b * g - a * h) * inv,
            (a * e - b * d) * inv,
        ]))
    }

    /// Inverse; a singular matrix is returned unchanged.
    pub fn inverse(self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            debug!(matrix = ?self.data, "singular 3x3 matrix left unchanged by inverse");
            self
        })
    }

    /// Transforms a point as `M · [p, 1]`.
    pub fn transform_point(&self, p: &Vec2) -> Vec2 {
        Vec2::new(
            self.at(0, 0) * p.x() + self.at(0, 1) * p.y() + self.at(0, 2),
            self.at(1, 0) * p.x() + self.at(1, 1) * p.y() + self.at(1, 2),
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x() - b.x()).abs() <= 1e-5 && (a.y() - b.y()).abs() <= 1e-5
    }

    #[test]
    fn rotate_quarter_turn_maps_x_to_y() {
        let p = Mat3::rotation(90.0).transform_point(&Vec2::new(1.0, 0.0));
        assert!(approx(p, Vec2::new(0.0, 1.0)), "{p}");
    }

    #[test]
    fn translate_then_scale_composes_in_call_order() {
        let m = Mat3::identity().translate(3.0, 4.0).scale(2.0, 2.0);
        let p = m.transform_point(&Vec2::new(1.0, 1.0));
        assert!(approx(p, Vec2::new(5.0, 6.0)), "{p}");
    }

    #[test]
    fn inverse_undoes_affine_transform() {
        let m = Mat3::identity().translate(3.0, -1.0).rotate(30.0).scale(2.0, 0.5);
        let p = Vec2::new(0.25, -4.0);
        let back = m.inverse().transform_point(&m.transform_point(&p));
        assert!(approx(back, p), "{back}");
    }

    #[test]
    fn singular_inverse_is_noop() {
        let m = Mat3::scaling(0.0, 1.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), m);
    }
}
