// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use tracing::{debug, warn};

use crate::{deg_to_rad, EulerOrder, MathError, Vec3, Vec4};

/// Row‑major 4×4 matrix for affine and projective transforms.
///
/// - Entries are addressed `(row, col)`; [`Mat4::to_array`] yields the rows
///   back to back, ready for upload to a rendering backend.
/// - The matrix acts on column vectors: translation lives in the last column
///   and composition post-multiplies (`m.translate(..)` is `m * T`).
/// - Values are immutable; every builder returns a new matrix, so chains read
///   left to right in the order the transforms are applied to the basis.
///
/// # Examples
/// ```
/// use prism_math::{Mat4, Vec3};
/// let m = Mat4::identity().translate(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(m.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// Uses `f32`; repeated composition accumulates rounding. Rotation builders
/// canonicalise `-0.0` to `+0.0` so exact comparisons stay stable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::identity();

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Creates a matrix from row-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    /// Translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::identity().translate(x, y, z)
    }

    /// Non-uniform scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::identity().scale(x, y, z)
    }

    /// Returns the matrix as a row‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Row `i` as a [`Vec4`].
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.at(i, 0), self.at(i, 1), self.at(i, 2), self.at(i, 3))
    }

    /// Column `j` as a [`Vec4`].
    pub fn column(&self, j: usize) -> Vec4 {
        Vec4::new(self.at(0, j), self.at(1, j), self.at(2, j), self.at(3, j))
    }

    /// Post-multiplies by a translation (`self * T`).
    ///
    /// The offset is pushed through the current basis into the last column.
    /// Translating by exactly `(0, 0, 0)` returns `self` untouched.
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return self;
        }
        let mut out = self.data;
        for row in 0..4 {
            out[row * 4 + 3] += self.at(row, 0) * x + self.at(row, 1) * y + self.at(row, 2) * z;
        }
        Self::new(out)
    }

    /// [`Mat4::translate`] taking a vector.
    pub fn translate_vec(self, offset: Vec3) -> Self {
        self.translate(offset.x(), offset.y(), offset.z())
    }

    /// Post-multiplies by a non-uniform scale (`self * S`).
    ///
    /// Only the upper 3×3 block is touched. Scaling by exactly `(1, 1, 1)`
    /// returns `self` untouched.
    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        if x == 1.0 && y == 1.0 && z == 1.0 {
            return self;
        }
        let mut out = self.data;
        for row in 0..3 {
            out[row * 4] *= x;
            out[row * 4 + 1] *= y;
            out[row * 4 + 2] *= z;
        }
        Self::new(out)
    }

    /// Uniform [`Mat4::scale`].
    pub fn scale_uniform(self, factor: f32) -> Self {
        self.scale(factor, factor, factor)
    }

    /// [`Mat4::scale`] taking a vector.
    pub fn scale_vec(self, factors: Vec3) -> Self {
        self.scale(factors.x(), factors.y(), factors.z())
    }

    /// Post-multiplies by a rotation of `degrees` about +X.
    ///
    /// An angle of exactly zero returns `self` untouched.
    pub fn rotate_x(self, degrees: f32) -> Self {
        if degrees == 0.0 {
            return self;
        }
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut out = self.data;
        for row in 0..4 {
            let b = self.at(row, 1);
            let cc = self.at(row, 2);
            out[row * 4 + 1] = b * c + cc * s;
            out[row * 4 + 2] = b * -s + cc * c;
        }
        Self::canonical(out)
    }

    /// Post-multiplies by a rotation of `degrees` about +Y.
    ///
    /// An angle of exactly zero returns `self` untouched.
    pub fn rotate_y(self, degrees: f32) -> Self {
        if degrees == 0.0 {
            return self;
        }
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut out = self.data;
        for row in 0..4 {
            let a = self.at(row, 0);
            let cc = self.at(row, 2);
            out[row * 4] = a * c + cc * -s;
            out[row * 4 + 2] = a * s + cc * c;
        }
        Self::canonical(out)
    }

    /// Post-multiplies by a rotation of `degrees` about +Z.
    ///
    /// Counter-clockwise when looking down -Z, matching
    /// `rotate(0.0, 0.0, degrees, EulerOrder::Xyz)`. An angle of exactly zero
    /// returns `self` untouched.
    pub fn rotate_z(self, degrees: f32) -> Self {
        if degrees == 0.0 {
            return self;
        }
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut out = self.data;
        for row in 0..4 {
            let a = self.at(row, 0);
            let b = self.at(row, 1);
            out[row * 4] = a * c + b * s;
            out[row * 4 + 1] = a * -s + b * c;
        }
        Self::canonical(out)
    }

    /// Post-multiplies by an Euler rotation (angles in degrees).
    ///
    /// `order` names the matrix product: [`EulerOrder::Xyz`] composes
    /// `Rx · Ry · Rz`, [`EulerOrder::Zyx`] composes `Rz · Ry · Rx`. The
    /// remaining orders have no closed form here and are rejected rather than
    /// approximated.
    ///
    /// # Errors
    /// Returns [`MathError::UnsupportedEulerOrder`] for `Xzy`, `Yxz`, `Yzx`
    /// and `Zxy`.
    ///
    /// # Examples
    /// ```
    /// use prism_math::{EulerOrder, Mat4, MathError};
    /// let err = Mat4::identity().rotate(10.0, 20.0, 30.0, EulerOrder::Yxz);
    /// assert_eq!(err, Err(MathError::UnsupportedEulerOrder(EulerOrder::Yxz)));
    /// ```
    pub fn rotate(self, x: f32, y: f32, z: f32, order: EulerOrder) -> Result<Self, MathError> {
        let (sa, ca) = deg_to_rad(x).sin_cos();
        let (sb, cb) = deg_to_rad(y).sin_cos();
        let (sc, cc) = deg_to_rad(z).sin_cos();

        let r = match order {
            EulerOrder::Xyz => [
                [cb * cc, -cb * sc, sb],
                [cc * sa * sb + ca * sc, -sc * sb * sa + cc * ca, -cb * sa],
                [-cc * sb * ca + sc * sa, cc * sa + sc * sb * ca, cb * ca],
            ],
            EulerOrder::Zyx => [
                [cc * cb, -sc * ca + cc * sb * sa, sc * sa + cc * sb * ca],
                [sc * cb, cc * ca + sc * sb * sa, -cc * sa + sc * sb * ca],
                [-sb, cb * sa, cb * ca],
            ],
            EulerOrder::Xzy | EulerOrder::Yxz | EulerOrder::Yzx | EulerOrder::Zxy => {
                warn!(%order, "rejecting euler rotation with unsupported axis order");
                return Err(MathError::UnsupportedEulerOrder(order));
            }
        };

        let mut out = self.data;
        for row in 0..4 {
            let m = [self.at(row, 0), self.at(row, 1), self.at(row, 2)];
            for (col, slot) in out[row * 4..row * 4 + 3].iter_mut().enumerate() {
                *slot = m[0] * r[0][col] + m[1] * r[1][col] + m[2] * r[2][col];
            }
        }
        Ok(Self::canonical(out))
    }

    /// [`Mat4::rotate`] taking the three angles as a vector.
    pub fn rotate_vec(self, degrees: Vec3, order: EulerOrder) -> Result<Self, MathError> {
        self.rotate(degrees.x(), degrees.y(), degrees.z(), order)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Not commutative; neither operand is modified.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scaling(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Multiplies every entry by `s`.
    pub fn mul_scalar(&self, s: f32) -> Self {
        Self::new(self.data.map(|v| v * s))
    }

    /// Swaps rows and columns.
    pub fn transpose(self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = [self.data[0], self.data[1], self.data[2], self.data[3]];
        let FirstRowMinors { q, r, s, t } = FirstRowMinors::new(&self.data);
        a * q - b * r + c * s - d * t
    }

    /// Returns `true` when the determinant is not exactly zero.
    ///
    /// Nearly singular matrices still report `true`; their inverse may be
    /// numerically useless.
    pub fn can_inverse(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Inverse via the classical adjugate, or `None` when the determinant is
    /// exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = self.data;
        let FirstRowMinors { q, r, s, t } = FirstRowMinors::new(&self.data);

        let det = a * q - b * r + c * s - d * t;
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;

        // Minors M(row, col) of every entry, rows 2..4 spelled out.
        let m21 = b * k * p + j * o * d + n * c * l - b * l * o - c * j * p - d * k * n;
        let m22 = a * k * p + i * o * d + m * c * l - a * l * o - c * i * p - d * k * m;
        let m23 = a * j * p + i * n * d + m * b * l - a * l * n - b * i * p - d * j * m;
        let m24 = a * j * o + i * n * c + m * b * k - a * k * n - b * i * o - c * j * m;
        let m31 = b * g * p + f * o * d + n * c * h - b * h * o - c * f * p - d * g * n;
        let m32 = a * g * p + e * o * d + m * c * h - a * h * o - c * e * p - d * g * m;
        let m33 = a * f * p + e * n * d + m * b * h - a * h * n - b * e * p - d * f * m;
        let m34 = a * f * o + e * n * c + m * b * g - a * g * n - b * e * o - c * f * m;
        let m41 = b * g * l + f * k * d + j * c * h - b * h * k - c * f * l - d * g * j;
        let m42 = a * g * l + e * k * d + i * c * h - a * h * k - c * e * l - d * g * i;
        let m43 = a * f * l + e * j * d + i * b * h - a * h * j - b * e * l - d * f * i;
        let m44 = a * f * k + e * j * c + i * b * g - a * g * j - b * e * k - c * f * i;

        // Checkerboard signs give the cofactors; laying them out by column
        // transposes them into the adjugate.
        let adjugate = [
            q, -m21, m31, -m41, //
            -r, m22, -m32, m42, //
            s, -m23, m33, -m43, //
            -t, m24, -m34, m44,
        ];
        Some(Self::new(adjugate.map(|v| v * inv_det)))
    }

    /// Inverse via the classical adjugate.
    ///
    /// A singular matrix (determinant exactly zero) is returned unchanged;
    /// use [`Mat4::try_inverse`] to observe that case.
    pub fn inverse(self) -> Self {
        match self.try_inverse() {
            Some(inv) => inv,
            None => {
                debug!(matrix = ?self.data, "singular matrix left unchanged by inverse");
                self
            }
        }
    }

    /// OpenGL-style perspective frustum.
    ///
    /// Note the parameter order: `top` precedes `bottom`.
    pub fn frustum(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        let x = right - left;
        let y = top - bottom;
        let z = far - near;
        Self::from_rows([
            [near * 2.0 / x, 0.0, (right + left) / x, 0.0],
            [0.0, near * 2.0 / y, (top + bottom) / y, 0.0],
            [0.0, 0.0, -(far + near) / z, -(far * near * 2.0) / z],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Symmetric perspective projection from a vertical field of view in
    /// degrees.
    ///
    /// The half-height at the near plane is `near * tan(fov / 2)`; the
    /// half-width scales it by `aspect`.
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (deg_to_rad(fov_degrees) * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, top, -top, near, far)
    }

    /// OpenGL-style orthographic projection.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let x = right - left;
        let y = top - bottom;
        let z = far - near;
        Self::from_rows([
            [2.0 / x, 0.0, 0.0, -(right + left) / x],
            [0.0, 2.0 / y, 0.0, -(top + bottom) / y],
            [0.0, 0.0, -2.0 / z, -(far + near) / z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// View orientation looking from `eye` towards `target`.
    ///
    /// Rows hold the camera's right, up and backward axes. The translation
    /// column stays at identity: camera position is applied separately.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let zaxis = eye.sub(&target).normalize();
        let xaxis = up.cross(&zaxis).normalize();
        let yaxis = zaxis.cross(&xaxis);
        Self::from_rows([
            [xaxis.x(), xaxis.y(), xaxis.z(), 0.0],
            [yaxis.x(), yaxis.y(), yaxis.z(), 0.0],
            [zaxis.x(), zaxis.y(), zaxis.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point as `M · [p, 1]` (no perspective divide).
    ///
    /// Honours [`Mat4::translate`].
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::point(*point)).xyz()
    }

    /// Transforms a direction as `M · [v, 0]`, ignoring translation.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::direction(*direction)).xyz()
    }

    /// Column-vector product `M · v`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Row-vector product `v · M`.
    ///
    /// This is the transpose convention: `v · M == Mᵀ · v`. It does not
    /// agree with [`Mat4::transform_vec4`] unless the matrix is symmetric.
    pub fn row_transform_vec4(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.column(0).dot(v),
            self.column(1).dot(v),
            self.column(2).dot(v),
            self.column(3).dot(v),
        )
    }

    /// Transforms a point as `M · [p, 1]` and divides by the resulting `w`.
    ///
    /// Returns `None` when `w` is exactly zero.
    pub fn project_point(&self, point: &Vec3) -> Option<Vec3> {
        let clip = self.transform_vec4(&Vec4::point(*point));
        if clip.w() == 0.0 {
            return None;
        }
        Some(clip.xyz().scale(1.0 / clip.w()))
    }

    /// Builds a matrix, folding `-0.0` into `+0.0`.
    fn canonical(data: [f32; 16]) -> Self {
        Self::new(data.map(|v| v + 0.0))
    }
}

/// The four 3×3 minors of the first row; shared by the determinant and the
/// inverse.
struct FirstRowMinors {
    q: f32,
    r: f32,
    s: f32,
    t: f32,
}

impl FirstRowMinors {
    fn new(data: &[f32; 16]) -> Self {
        let [_, _, _, _, e, f, g, h, i, j, k, l, m, n, o, p] = *data;
        Self {
            q: f * k * p + j * o * h + n * g * l - f * l * o - g * j * p - h * k * n,
            r: e * k * p + i * o * h + m * g * l - e * l * o - g * i * p - h * k * m,
            s: e * j * p + i * n * h + m * f * l - e * l * n - f * i * p - h * j * m,
            t: e * j * o + i * n * g + m * f * k - e * k * n - f * i * o - g * j * m,
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let open = if row == 0 { '[' } else { ' ' };
            let close = if row == 3 { "]" } else { "" };
            writeln!(
                f,
                "{open}{:5.2}, {:5.2}, {:5.2}, {:5.2}{close}",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3),
            )?;
        }
        Ok(())
    }
}
