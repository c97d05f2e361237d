// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::Vec3;

/// Anything that can present three vertices to a ray query.
///
/// Winding only matters for [`Triangle3::face_normal`]; intersection accepts
/// either orientation.
pub trait Triangle3 {
    /// First vertex.
    fn v1(&self) -> Vec3;
    /// Second vertex.
    fn v2(&self) -> Vec3;
    /// Third vertex.
    fn v3(&self) -> Vec3;

    /// Unnormalised normal `(v2 - v1) × (v3 - v2)`.
    ///
    /// Zero for degenerate (collinear or coincident) vertices.
    fn face_normal(&self) -> Vec3 {
        let (a, b, c) = (self.v1(), self.v2(), self.v3());
        (b - a).cross(&(c - b))
    }
}

/// Plain triangle value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Triangle {
    vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub const fn new(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Vertices in declaration order.
    pub const fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (a + b + c) * (1.0 / 3.0)
    }
}

impl From<[Vec3; 3]> for Triangle {
    fn from(vertices: [Vec3; 3]) -> Self {
        Self { vertices }
    }
}

impl Triangle3 for Triangle {
    fn v1(&self) -> Vec3 {
        self.vertices[0]
    }

    fn v2(&self) -> Vec3 {
        self.vertices[1]
    }

    fn v3(&self) -> Vec3 {
        self.vertices[2]
    }
}

impl Triangle3 for [Vec3; 3] {
    fn v1(&self) -> Vec3 {
        self[0]
    }

    fn v2(&self) -> Vec3 {
        self[1]
    }

    fn v3(&self) -> Vec3 {
        self[2]
    }
}
