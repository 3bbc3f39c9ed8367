// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable co-sorting of points and their element handles.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;

use crate::types::Axis;

/// Stable sort of `points` along `axis`, applying the same permutation to `handles`.
///
/// Ties keep their input order, so `sorted_handles[i]` always names the element
/// that `sorted_points[i]` came from. Empty and single-element inputs come back
/// unchanged.
pub fn sort_by<H: Copy>(points: &[Point], handles: &[H], axis: Axis) -> (Vec<Point>, Vec<H>) {
    debug_assert_eq!(
        points.len(),
        handles.len(),
        "points and handles must be parallel sequences"
    );
    let mut order: Vec<usize> = (0..points.len()).collect();
    // Stable; NaNs are rejected before a run, so the `Equal` fallback never hides one.
    order.sort_by(|&a, &b| {
        axis.coord(points[a])
            .partial_cmp(&axis.coord(points[b]))
            .unwrap_or(Ordering::Equal)
    });
    let sorted_points = order.iter().map(|&i| points[i]).collect();
    let sorted_handles = order.iter().map(|&i| handles[i]).collect();
    (sorted_points, sorted_handles)
}

/// Points and their handles, sorted along one axis.
///
/// Both sequences are permuted together: `points()[i]` and `handles()[i]`
/// always describe the same input element.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedView<H> {
    axis: Axis,
    points: Vec<Point>,
    handles: Vec<H>,
}

impl<H: Copy> OrderedView<H> {
    /// Build a view of `points`/`handles` ordered along `axis`.
    pub fn new(points: &[Point], handles: &[H], axis: Axis) -> Self {
        let (points, handles) = sort_by(points, handles, axis);
        Self {
            axis,
            points,
            handles,
        }
    }

    /// The axis this view is sorted by.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Sorted points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Handles, parallel to [`points`][Self::points].
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest coordinate along the view's axis, if non-empty.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((self.axis.coord(*first), self.axis.coord(*last)))
    }

    /// Iterate `(point, handle)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, H)> + '_ {
        self.points.iter().copied().zip(self.handles.iter().copied())
    }
}
