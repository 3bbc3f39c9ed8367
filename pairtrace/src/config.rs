// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run configuration and the visual bounds derived from it.

use crate::order::OrderedView;
use crate::types::Axis;

/// Parameters for a run.
///
/// These only shape the cosmetic bounds stored in `Divide` and `Strip`
/// frames; they never change which pair is found.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SolverConfig {
    /// Distance the drawn lines extend before the smallest input y.
    pub y_start_padding: f64,
    /// Distance the drawn lines extend past the largest input y.
    pub y_end_padding: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            y_start_padding: 10.0,
            y_end_padding: 20.0,
        }
    }
}

/// Vertical span used by every `Divide` line and `Strip` band of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VisualBounds {
    /// Top of the span.
    pub y_start: f64,
    /// Bottom of the span.
    pub y_end: f64,
}

impl VisualBounds {
    /// Derive the bounds from the full y-sorted view, once per run.
    ///
    /// Returns `None` for an empty view or one not sorted by y.
    pub fn from_y_view<H: Copy>(by_y: &OrderedView<H>, config: &SolverConfig) -> Option<Self> {
        if by_y.axis() != Axis::Y {
            return None;
        }
        let (min_y, max_y) = by_y.extent()?;
        Some(Self {
            y_start: min_y - config.y_start_padding,
            y_end: max_y + config.y_end_padding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn default_padding() {
        let points = [Point::new(0.0, 5.0), Point::new(1.0, -3.0), Point::new(2.0, 40.0)];
        let view = OrderedView::new(&points, &[0, 1, 2], Axis::Y);
        let bounds = VisualBounds::from_y_view(&view, &SolverConfig::default())
            .expect("non-empty view has bounds");
        assert_eq!(bounds.y_start, -13.0);
        assert_eq!(bounds.y_end, 60.0);
    }

    #[test]
    fn custom_padding_and_wrong_axis() {
        let points = [Point::new(0.0, 5.0), Point::new(1.0, 6.0)];
        let config = SolverConfig {
            y_start_padding: 0.0,
            y_end_padding: 1.0,
        };
        let view = OrderedView::new(&points, &['a', 'b'], Axis::Y);
        assert_eq!(
            VisualBounds::from_y_view(&view, &config),
            Some(VisualBounds {
                y_start: 5.0,
                y_end: 7.0
            })
        );
        let by_x = OrderedView::new(&points, &['a', 'b'], Axis::X);
        assert_eq!(VisualBounds::from_y_view(&by_x, &config), None);
    }
}
