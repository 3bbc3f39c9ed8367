// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Euclidean distance helpers.
//!
//! Searches compare [`squared_distance`] only; the root is taken once, when a
//! result is about to be recorded.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// `(a.x - b.x)² + (a.y - b.y)²`.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between `a` and `b`, the root of [`squared_distance`].
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    squared_distance(a, b).sqrt()
}
