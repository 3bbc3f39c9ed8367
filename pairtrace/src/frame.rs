// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded algorithm events.
//!
//! A run produces an ordered list of [`Frame`]s. Each frame wraps one
//! [`FrameKind`] and a sequence number; replaying the frames in order
//! reproduces every decision the solver made:
//!
//! - [`FrameKind::Divide`]: a vertical dividing line was chosen.
//! - [`FrameKind::BruteForce`]: a base case (≤ 3 points) was solved exhaustively.
//! - [`FrameKind::Compare`]: the two half results are about to be merged.
//! - [`FrameKind::Strip`]: the elements close enough to the line to matter.
//! - [`FrameKind::StripClosest`]: the outcome of scanning that strip.
//!
//! Children always precede their parent's `Compare`, `Strip` and
//! `StripClosest` frames (depth-first, post-order merge).

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

/// One observable algorithm event.
///
/// `H` is the caller's element handle type; the solver only copies handles
/// into frames, it never looks inside them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        tag = "type",
        rename_all = "camelCase",
        rename_all_fields = "camelCase"
    )
)]
pub enum FrameKind<H> {
    /// A vertical split at `line_x`, drawn from `line_y_start` to `line_y_end`.
    Divide {
        /// X coordinate of the dividing line.
        line_x: f64,
        /// Top of the line (global visual bound).
        line_y_start: f64,
        /// Bottom of the line (global visual bound).
        line_y_end: f64,
    },
    /// The left and right results are about to be compared.
    Compare,
    /// Elements lying within the candidate distance of the dividing line.
    Strip {
        /// Left edge of the band.
        box_x1: f64,
        /// Top edge of the band.
        box_y1: f64,
        /// Right edge of the band.
        box_x2: f64,
        /// Bottom edge of the band.
        box_y2: f64,
        /// Handles inside the band, in x order.
        handles: Vec<H>,
    },
    /// Result of an exhaustive base-case scan.
    BruteForce {
        /// First point of the closest pair.
        p1: Point,
        /// Second point of the closest pair.
        p2: Point,
        /// True distance between `p1` and `p2`.
        distance: f64,
        /// Handles of every point in the base case, in input order.
        handles: Vec<H>,
    },
    /// Result of scanning the strip.
    StripClosest {
        /// First point of the best pair after the scan.
        p1: Point,
        /// Second point of the best pair after the scan.
        p2: Point,
        /// True distance between `p1` and `p2`.
        distance: f64,
        /// Whether the strip held a pair strictly closer than the incoming candidate.
        improved_in_strip: bool,
        /// Strip handles, in y order.
        handles: Vec<H>,
    },
}

impl<H> FrameKind<H> {
    /// Short, stable name of the variant (matches the serialized `type` tag).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Divide { .. } => "divide",
            Self::Compare => "compare",
            Self::Strip { .. } => "strip",
            Self::BruteForce { .. } => "bruteForce",
            Self::StripClosest { .. } => "stripClosest",
        }
    }

    /// Handles carried by this frame; empty for `Divide` and `Compare`.
    pub fn handles(&self) -> &[H] {
        match self {
            Self::Strip { handles, .. }
            | Self::BruteForce { handles, .. }
            | Self::StripClosest { handles, .. } => handles,
            Self::Divide { .. } | Self::Compare => &[],
        }
    }

    /// The dividing line of a `Divide` frame.
    pub fn divide_line(&self) -> Option<Line> {
        match *self {
            Self::Divide {
                line_x,
                line_y_start,
                line_y_end,
            } => Some(Line::new((line_x, line_y_start), (line_x, line_y_end))),
            _ => None,
        }
    }

    /// The band of a `Strip` frame.
    pub fn strip_band(&self) -> Option<Rect> {
        match *self {
            Self::Strip {
                box_x1,
                box_y1,
                box_x2,
                box_y2,
                ..
            } => Some(Rect::new(box_x1, box_y1, box_x2, box_y2)),
            _ => None,
        }
    }

    /// The highlighted pair of a `BruteForce` or `StripClosest` frame.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match *self {
            Self::BruteForce { p1, p2, .. } | Self::StripClosest { p1, p2, .. } => Some((p1, p2)),
            _ => None,
        }
    }

    /// The reported distance of a `BruteForce` or `StripClosest` frame.
    pub fn distance(&self) -> Option<f64> {
        match *self {
            Self::BruteForce { distance, .. } | Self::StripClosest { distance, .. } => {
                Some(distance)
            }
            _ => None,
        }
    }
}

/// A [`FrameKind`] stamped with its position in the run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Frame<H> {
    /// Position in the run's log; the first frame is `0` and there are no gaps.
    pub sequence_number: usize,
    /// The event itself.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: FrameKind<H>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn divide_line_is_vertical() {
        let kind = FrameKind::<u32>::Divide {
            line_x: 4.0,
            line_y_start: -10.0,
            line_y_end: 30.0,
        };
        let line = kind.divide_line().expect("divide frames have a line");
        assert_eq!(line.p0, Point::new(4.0, -10.0));
        assert_eq!(line.p1, Point::new(4.0, 30.0));
        assert!(kind.strip_band().is_none());
        assert!(kind.handles().is_empty());
    }

    #[test]
    fn strip_band_spans_box() {
        let kind = FrameKind::Strip {
            box_x1: 1.0,
            box_y1: -10.0,
            box_x2: 3.0,
            box_y2: 20.0,
            handles: vec![7_u32, 9],
        };
        assert_eq!(kind.strip_band(), Some(Rect::new(1.0, -10.0, 3.0, 20.0)));
        assert_eq!(kind.handles(), &[7, 9]);
        assert_eq!(kind.name(), "strip");
        assert_eq!(kind.pair(), None);
    }

    #[test]
    fn pair_and_distance_for_results() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 2.0);
        let kind = FrameKind::StripClosest {
            p1: a,
            p2: b,
            distance: 2.0,
            improved_in_strip: false,
            handles: vec!['a', 'b'],
        };
        assert_eq!(kind.pair(), Some((a, b)));
        assert_eq!(kind.distance(), Some(2.0));
        assert_eq!(FrameKind::<char>::Compare.distance(), None);
    }
}
