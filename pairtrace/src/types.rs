// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive value types shared by every solver stage.

use kurbo::Point;

/// Coordinate axis used to order points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Axis {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
}

impl Axis {
    /// The coordinate of `p` along this axis.
    #[inline(always)]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// The closest pair found by a run, or by one stage of it.
///
/// `p1` and `p2` are unordered; both are always drawn from the input set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestPair {
    /// True (non-squared) Euclidean distance between `p1` and `p2`.
    pub distance: f64,
    /// First point of the pair.
    pub p1: Point,
    /// Second point of the pair.
    pub p2: Point,
}

impl ClosestPair {
    /// Whether `{p1, p2}` equals `{a, b}`, ignoring order.
    pub fn connects(&self, a: Point, b: Point) -> bool {
        (self.p1 == a && self.p2 == b) || (self.p1 == b && self.p2 == a)
    }
}
