// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merge step: look for a closer pair straddling the dividing line.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::frame::FrameKind;
use crate::metric::squared_distance;
use crate::order::sort_by;
use crate::types::{Axis, ClosestPair};

/// Scan the strip around the dividing line for a pair closer than `candidate`.
///
/// `strip_points` must already lie within `candidate.distance` of the line
/// horizontally. The strip is re-sorted by y; each point is then compared with
/// its successors only while their y gap, squared, stays below the current
/// best squared distance. Within each half no two points are closer than the
/// candidate, so that window holds a bounded number of points.
///
/// Only a strictly smaller squared distance replaces the best pair. The
/// returned [`FrameKind::StripClosest`] reports the final pair, its distance,
/// whether the strip improved on `candidate`, and the strip handles in y order.
pub fn strip_merge<H: Copy>(
    strip_points: &[Point],
    strip_handles: &[H],
    candidate: ClosestPair,
) -> (ClosestPair, FrameKind<H>) {
    let (points, handles) = sort_by(strip_points, strip_handles, Axis::Y);

    let mut best_d2 = squared_distance(candidate.p1, candidate.p2);
    let (mut p1, mut p2) = (candidate.p1, candidate.p2);
    let mut improved_in_strip = false;

    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let dy = b.y - a.y;
            if dy * dy >= best_d2 {
                break;
            }
            let d2 = squared_distance(a, b);
            if d2 < best_d2 {
                tracing::trace!(x1 = a.x, y1 = a.y, x2 = b.x, y2 = b.y, d2, "strip improved");
                best_d2 = d2;
                p1 = a;
                p2 = b;
                improved_in_strip = true;
            }
        }
    }

    let distance = best_d2.sqrt();
    let frame = FrameKind::StripClosest {
        p1,
        p2,
        distance,
        improved_in_strip,
        handles,
    };
    (ClosestPair { distance, p1, p2 }, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn candidate(p1: Point, p2: Point) -> ClosestPair {
        ClosestPair {
            distance: crate::metric::distance(p1, p2),
            p1,
            p2,
        }
    }

    #[test]
    fn finds_cross_pair() {
        let strip = [
            Point::new(1.0, 0.0),
            Point::new(1.5, 5.0),
            Point::new(2.5, 5.5),
            Point::new(3.0, 0.5),
        ];
        let best = candidate(Point::new(0.0, 0.0), Point::new(0.0, 2.0));
        let (pair, frame) = strip_merge(&strip, &[0, 1, 2, 3], best);
        assert!(pair.connects(strip[0], strip[3]) || pair.connects(strip[1], strip[2]));
        assert!(pair.distance < 2.0);
        let FrameKind::StripClosest {
            improved_in_strip,
            handles,
            distance,
            ..
        } = frame
        else {
            panic!("strip merge records a StripClosest frame");
        };
        assert!(improved_in_strip);
        assert_eq!(distance, pair.distance);
        // y order: 0 (0.0), 3 (0.5), 1 (5.0), 2 (5.5)
        assert_eq!(handles, vec![0, 3, 1, 2]);
    }

    #[test]
    fn keeps_candidate_when_nothing_closer() {
        let strip = [Point::new(5.0, 0.0), Point::new(6.0, 10.0)];
        let best = candidate(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let (pair, frame) = strip_merge(&strip, &['x', 'y'], best);
        assert_eq!(pair, best);
        assert!(matches!(
            frame,
            FrameKind::StripClosest {
                improved_in_strip: false,
                ..
            }
        ));
    }

    #[test]
    fn equal_distance_does_not_replace() {
        let strip = [Point::new(5.0, 0.0), Point::new(5.0, 1.0)];
        let best = candidate(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let (pair, _) = strip_merge(&strip, &[0, 1], best);
        assert_eq!(pair.p1, best.p1);
        assert_eq!(pair.p2, best.p2);
    }

    #[test]
    fn empty_strip() {
        let best = candidate(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let (pair, frame) = strip_merge::<u32>(&[], &[], best);
        assert_eq!(pair, best);
        assert!(frame.handles().is_empty());
    }
}
