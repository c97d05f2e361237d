// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

/// Axis sequence in which three single-axis rotations are composed.
///
/// The name reads left to right as the matrix product: `Xyz` is
/// `Rx · Ry · Rz`. Only [`EulerOrder::Xyz`] and [`EulerOrder::Zyx`] have closed
/// forms in [`crate::Mat4::rotate`]; the rest are rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    /// `Rx · Ry · Rz`.
    #[default]
    Xyz,
    /// `Rx · Rz · Ry`.
    Xzy,
    /// `Ry · Rx · Rz`.
    Yxz,
    /// `Ry · Rz · Rx`.
    Yzx,
    /// `Rz · Rx · Ry`.
    Zxy,
    /// `Rz · Ry · Rx`.
    Zyx,
}

impl EulerOrder {
    /// Every order, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    /// Returns `true` for the orders [`crate::Mat4::rotate`] can compose.
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Xyz | Self::Zyx)
    }

    /// Upper-case axis letters, e.g. `"XYZ"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "XYZ",
            Self::Xzy => "XZY",
            Self::Yxz => "YXZ",
            Self::Yzx => "YZX",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
