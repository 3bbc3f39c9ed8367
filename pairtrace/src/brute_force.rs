// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive solver for the recursion's base case.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::error::SolveError;
use crate::frame::FrameKind;
use crate::metric::squared_distance;
use crate::types::ClosestPair;

/// Largest point count solved by [`brute_force`] instead of by splitting.
pub const BASE_CASE_MAX: usize = 3;

/// Compare every unordered pair of `points` and return the closest one.
///
/// Pairs are visited as `(i, j)` with `i < j` in input order and only a
/// strictly smaller squared distance replaces the current best, so the first
/// pair encountered wins ties. The returned [`FrameKind::BruteForce`] carries
/// `handles` in their given order.
///
/// Fewer than two points have no pair and yield
/// [`SolveError::DegenerateBaseCase`].
pub fn brute_force<H: Copy>(
    points: &[Point],
    handles: &[H],
) -> Result<(ClosestPair, FrameKind<H>), SolveError> {
    debug_assert!(
        points.len() <= BASE_CASE_MAX,
        "brute force is only used for base cases of at most {BASE_CASE_MAX} points"
    );
    let mut best: Option<(f64, Point, Point)> = None;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let d2 = squared_distance(a, b);
            if best.is_none_or(|(best_d2, _, _)| d2 < best_d2) {
                best = Some((d2, a, b));
            }
        }
    }
    let Some((d2, p1, p2)) = best else {
        return Err(SolveError::DegenerateBaseCase { len: points.len() });
    };
    let distance = d2.sqrt();
    let frame = FrameKind::BruteForce {
        p1,
        p2,
        distance,
        handles: handles.to_vec(),
    };
    Ok((ClosestPair { distance, p1, p2 }, frame))
}
