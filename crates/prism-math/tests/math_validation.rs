// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixture-driven validation for the math kernel.
//!
//! Ensures scalar, vector and matrix behaviour stays consistent with the
//! hand-computed values in `fixtures/math-fixtures.json`.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use serde::Deserialize;

use prism_math::{deg_to_rad, rad_to_deg, Mat4, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    scalars: ScalarFixtures,
    vec3: Vec3Fixtures,
    mat4: Mat4Fixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(
                !slice.is_empty(),
                "math fixtures set '{name}' must not be empty (len={})",
                slice.len()
            );
        }

        ensure("scalars.deg_to_rad", &self.scalars.deg_to_rad);
        ensure("scalars.rad_to_deg", &self.scalars.rad_to_deg);
        ensure("vec3.add", &self.vec3.add);
        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.length", &self.vec3.length);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("mat4.multiply", &self.mat4.multiply);
        ensure("mat4.transform_point", &self.mat4.transform_point);
        ensure("mat4.transform_direction", &self.mat4.transform_direction);
        ensure("mat4.determinant", &self.mat4.determinant);
        ensure("mat4.inverse", &self.mat4.inverse);
        ensure("mat4.rotate_z", &self.mat4.rotate_z);
        ensure("mat4.frustum", &self.mat4.frustum);
        ensure("mat4.ortho", &self.mat4.ortho);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-6
    }

    const fn default_relative() -> f32 {
        1e-6
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScalarFixtures {
    deg_to_rad: Vec<UnaryFixture>,
    rad_to_deg: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f32,
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    add: Vec<Vec3BinaryFixture>,
    dot: Vec<Vec3DotFixture>,
    cross: Vec<Vec3BinaryFixture>,
    length: Vec<Vec3LengthFixture>,
    normalize: Vec<Vec3NormalizeFixture>,
}

#[derive(Debug, Deserialize)]
struct Vec3BinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Vec3DotFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3LengthFixture {
    value: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3NormalizeFixture {
    value: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    multiply: Vec<Mat4BinaryFixture>,
    transform_point: Vec<Mat4Vec3Fixture>,
    transform_direction: Vec<Mat4Vec3Fixture>,
    determinant: Vec<Mat4ScalarFixture>,
    inverse: Vec<Mat4UnaryFixture>,
    rotate_z: Vec<Mat4AngleFixture>,
    frustum: Vec<Mat4PlanesFixture>,
    ortho: Vec<Mat4PlanesFixture>,
}

#[derive(Debug, Deserialize)]
struct Mat4BinaryFixture {
    a: [f32; 16],
    b: [f32; 16],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct Mat4Vec3Fixture {
    matrix: [f32; 16],
    vector: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat4ScalarFixture {
    matrix: [f32; 16],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Mat4UnaryFixture {
    matrix: [f32; 16],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct Mat4AngleFixture {
    degrees: f32,
    expected: [f32; 16],
}

/// `[left, right, a, b, near, far]`; `a`/`b` follow each builder's own
/// parameter order.
#[derive(Debug, Deserialize)]
struct Mat4PlanesFixture {
    planes: [f32; 6],
    expected: [f32; 16],
}

fn assert_scalar(actual: f32, expected: f32, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_slice(actual: &[f32], expected: &[f32], tol: &Tolerance, ctx: &str) {
    assert_eq!(actual.len(), expected.len(), "{ctx}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        let allowed = tol.allowed_error(*e);
        assert!(
            diff <= allowed,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {allowed})"
        );
    }
}

#[test]
fn scalar_fixtures_all_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.scalars.deg_to_rad {
        assert_scalar(
            deg_to_rad(fix.value),
            fix.expected,
            tol,
            &format!("scalars.deg_to_rad value={}", fix.value),
        );
    }

    for fix in &FIXTURES.scalars.rad_to_deg {
        // Degrees are two orders of magnitude larger than radians; widen the
        // absolute floor accordingly.
        let wide = Tolerance {
            absolute: tol.absolute * 100.0,
            relative: tol.relative * 10.0,
        };
        assert_scalar(
            rad_to_deg(fix.value),
            fix.expected,
            &wide,
            &format!("scalars.rad_to_deg value={}", fix.value),
        );
    }
}

#[test]
fn vec3_fixtures_cover_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.vec3.add {
        let actual = Vec3::from(fix.a) + Vec3::from(fix.b);
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("vec3.add a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.vec3.dot {
        let actual = Vec3::from(fix.a).dot(&Vec3::from(fix.b));
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("vec3.dot a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.vec3.cross {
        let actual = Vec3::from(fix.a).cross(&Vec3::from(fix.b));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("vec3.cross a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for (idx, fix) in FIXTURES.vec3.length.iter().enumerate() {
        assert_scalar(
            Vec3::from(fix.value).length(),
            fix.expected,
            tol,
            &format!("vec3.length#[{idx}] value={:?}", fix.value),
        );
    }

    for (idx, fix) in FIXTURES.vec3.normalize.iter().enumerate() {
        assert_slice(
            &Vec3::from(fix.value).normalize().to_array(),
            &fix.expected,
            tol,
            &format!("vec3.normalize#[{idx}] value={:?}", fix.value),
        );
    }
}

#[test]
fn mat4_fixtures_validate_transformations() {
    let tol = &FIXTURES.tolerance;
    for (i, fix) in FIXTURES.mat4.multiply.iter().enumerate() {
        let actual = Mat4::from(fix.a).multiply(&Mat4::from(fix.b));
        let context = format!("mat4.multiply[{}] a0={:.3} b0={:.3}", i, fix.a[0], fix.b[0]);
        assert_slice(&actual.to_array(), &fix.expected, tol, &context);
    }

    for fix in &FIXTURES.mat4.transform_point {
        // Fixture vectors are treated as points (homogeneous w = 1).
        let actual = Mat4::from(fix.matrix).transform_point(&Vec3::from(fix.vector));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.transform_point vector={:?}", fix.vector),
        );
    }

    for fix in &FIXTURES.mat4.transform_direction {
        // Directions ignore translation (homogeneous w = 0).
        let actual = Mat4::from(fix.matrix).transform_direction(&Vec3::from(fix.vector));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.transform_direction vector={:?}", fix.vector),
        );
    }
}

#[test]
fn mat4_fixtures_validate_inversion() {
    let tol = &FIXTURES.tolerance;
    for (i, fix) in FIXTURES.mat4.determinant.iter().enumerate() {
        assert_scalar(
            Mat4::from(fix.matrix).determinant(),
            fix.expected,
            tol,
            &format!("mat4.determinant[{i}]"),
        );
    }

    for (i, fix) in FIXTURES.mat4.inverse.iter().enumerate() {
        let m = Mat4::from(fix.matrix);
        let Some(actual) = m.try_inverse() else {
            panic!("mat4.inverse[{i}]: fixture matrix is singular");
        };
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.inverse[{i}]"),
        );
    }
}

#[test]
fn mat4_fixtures_validate_builders() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.mat4.rotate_z {
        let actual = Mat4::identity().rotate_z(fix.degrees);
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.rotate_z degrees={}", fix.degrees),
        );
    }

    for fix in &FIXTURES.mat4.frustum {
        let [l, r, t, b, n, f] = fix.planes;
        assert_slice(
            &Mat4::frustum(l, r, t, b, n, f).to_array(),
            &fix.expected,
            tol,
            &format!("mat4.frustum planes={:?}", fix.planes),
        );
    }

    for fix in &FIXTURES.mat4.ortho {
        let [l, r, b, t, n, f] = fix.planes;
        assert_slice(
            &Mat4::ortho(l, r, b, t, n, f).to_array(),
            &fix.expected,
            tol,
            &format!("mat4.ortho planes={:?}", fix.planes),
        );
    }
}
