// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divide-and-conquer orchestration.

use alloc::vec::Vec;
use core::fmt::Debug;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::brute_force::{BASE_CASE_MAX, brute_force};
use crate::config::{SolverConfig, VisualBounds};
use crate::error::{InputError, SolveError};
use crate::frame::{Frame, FrameKind};
use crate::order::OrderedView;
use crate::recorder::{Discard, FrameRecorder, FrameSink};
use crate::strip::strip_merge;
use crate::types::{Axis, ClosestPair};

/// Run the closest-pair search over `points`, sending every event to `sink`.
///
/// `handles[i]` is the caller's identifier for `points[i]`; it is copied into
/// frames and never inspected. The sink is reset before anything else happens,
/// so a rejected input leaves it empty.
///
/// # Errors
///
/// [`SolveError::InvalidInput`] when the sequences differ in length, hold fewer
/// than two points, or contain a non-finite coordinate.
pub fn solve_into<H, S>(
    config: &SolverConfig,
    points: &[Point],
    handles: &[H],
    sink: &mut S,
) -> Result<ClosestPair, SolveError>
where
    H: Copy + Debug,
    S: FrameSink<H> + ?Sized,
{
    sink.reset();
    validate(points, handles)?;

    let by_x = OrderedView::new(points, handles, Axis::X);
    let by_y = OrderedView::new(points, handles, Axis::Y);
    let bounds = VisualBounds::from_y_view(&by_y, config).ok_or(InputError::Empty)?;
    tracing::debug!(
        points = points.len(),
        y_start = bounds.y_start,
        y_end = bounds.y_end,
        "solving closest pair"
    );

    let mut run = Run { bounds, sink };
    let result = run.closest_pair(by_x.points(), by_x.handles())?;
    tracing::debug!(
        distance = result.distance,
        x1 = result.p1.x,
        y1 = result.p1.y,
        x2 = result.p2.x,
        y2 = result.p2.y,
        "closest pair solved"
    );
    Ok(result)
}

/// Closest pair of `points` without recording a trace.
///
/// # Errors
///
/// Same as [`solve_into`].
pub fn closest_pair(points: &[Point]) -> Result<ClosestPair, SolveError> {
    let handles: Vec<usize> = (0..points.len()).collect();
    solve_into(&SolverConfig::default(), points, &handles, &mut Discard)
}

fn validate<H>(points: &[Point], handles: &[H]) -> Result<(), InputError> {
    if points.len() != handles.len() {
        return Err(InputError::LengthMismatch {
            points: points.len(),
            handles: handles.len(),
        });
    }
    match points.len() {
        0 => return Err(InputError::Empty),
        1 => return Err(InputError::SinglePoint),
        _ => {}
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InputError::NonFinite { index });
    }
    Ok(())
}

/// State of one run: the global bounds and where frames go.
struct Run<'a, S: ?Sized> {
    bounds: VisualBounds,
    sink: &'a mut S,
}

impl<S: ?Sized> Run<'_, S> {
    /// Solve the x-sorted slice `points` (with parallel `handles`).
    ///
    /// Emits `Divide`, the children's frames, `Compare`, `Strip`, then
    /// `StripClosest`; or a single `BruteForce` frame at the base case.
    fn closest_pair<H>(&mut self, points: &[Point], handles: &[H]) -> Result<ClosestPair, SolveError>
    where
        H: Copy,
        S: FrameSink<H>,
    {
        let n = points.len();
        if n <= BASE_CASE_MAX {
            let (result, frame) = brute_force(points, handles)?;
            self.sink.record(frame);
            return Ok(result);
        }

        let mid = n / 2;
        let mid_x = points[mid].x;
        let (left_points, right_points) = points.split_at(mid);
        let (left_handles, right_handles) = handles.split_at(mid);

        self.sink.record(FrameKind::Divide {
            line_x: mid_x,
            line_y_start: self.bounds.y_start,
            line_y_end: self.bounds.y_end,
        });

        let left = self.closest_pair(left_points, left_handles)?;
        let right = self.closest_pair(right_points, right_handles)?;

        self.sink.record(FrameKind::Compare);
        // Equal halves resolve to the left pair.
        let best = if left.distance <= right.distance {
            left
        } else {
            right
        };
        let d = best.distance;

        let (strip_points, strip_handles): (Vec<Point>, Vec<H>) = points
            .iter()
            .zip(handles)
            .filter(|(p, _)| (p.x - mid_x).abs() < d)
            .map(|(&p, &h)| (p, h))
            .unzip();

        self.sink.record(FrameKind::Strip {
            box_x1: mid_x - d,
            box_y1: self.bounds.y_start,
            box_x2: mid_x + d,
            box_y2: self.bounds.y_end,
            handles: strip_handles.clone(),
        });

        let (result, frame) = strip_merge(&strip_points, &strip_handles, best);
        self.sink.record(frame);
        Ok(result)
    }
}

/// A reusable solver that keeps the frame log of its latest run.
///
/// ```rust
/// use kurbo::Point;
/// use pairtrace::{FrameKind, Solver};
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let mut solver = Solver::new();
/// let pair = solver.solve(&points, &["a", "b"]).unwrap();
/// assert_eq!(pair.distance, 5.0);
/// assert!(matches!(solver.frames()[0].kind, FrameKind::BruteForce { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct Solver<H> {
    config: SolverConfig,
    recorder: FrameRecorder<H>,
}

impl<H: Copy + Debug> Default for Solver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Debug> Solver<H> {
    /// Create a solver with [`SolverConfig::default`].
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            recorder: FrameRecorder::new(),
        }
    }

    /// The configuration used for every run.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve `points`, replacing the previous run's frames.
    ///
    /// # Errors
    ///
    /// See [`solve_into`].
    pub fn solve(&mut self, points: &[Point], handles: &[H]) -> Result<ClosestPair, SolveError> {
        solve_into(&self.config, points, handles, &mut self.recorder)
    }

    /// Frames of the most recent run.
    pub fn frames(&self) -> &[Frame<H>] {
        self.recorder.frames()
    }

    /// The recorder holding the most recent run.
    pub fn recorder(&self) -> &FrameRecorder<H> {
        &self.recorder
    }

    /// Move the most recent run's frames out of the solver.
    pub fn take_frames(&mut self) -> Vec<Frame<H>> {
        self.recorder.take_frames()
    }
}
