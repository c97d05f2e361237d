// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised while building geometric primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A bounding box was requested for zero vertices.
    #[error("[EMPTY_VERTEX_SET] cannot bound an empty vertex set")]
    EmptyVertexSet,
}
