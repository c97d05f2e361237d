// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::EulerOrder;

/// Errors emitted by the math kernel.
///
/// Degenerate numeric inputs (singular matrices, zero-length vectors) are
/// defined behaviour and never surface here; only requests the kernel cannot
/// honour do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The requested Euler axis order has no closed-form rotation.
    #[error("[UNSUPPORTED_EULER_ORDER] euler order {0} is not supported (use XYZ or ZYX)")]
    UnsupportedEulerOrder(EulerOrder),
}
