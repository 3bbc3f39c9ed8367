// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pairtrace --heading-base-level=0

//! Pairtrace: divide-and-conquer closest pair of points, with a replayable trace.
//!
//! Pairtrace finds the two closest points of a fixed 2D point set using the classic
//! `O(n log n)` divide-and-conquer algorithm, and records every decision it makes as a
//! typed [`Frame`] so an external visualizer can play the computation back step by step.
//!
//! - Points are [`kurbo::Point`]s. Each point travels with a caller-chosen handle `H`
//!   (an index, an id, a key into a scene) that the engine copies into frames and never
//!   inspects.
//! - [`Solver`] owns a [`FrameRecorder`] and keeps the log of its latest run.
//! - [`solve_into`] runs against any [`FrameSink`]; [`closest_pair`] skips the trace.
//!
//! The stages are exposed individually: [`sort_by`]/[`OrderedView`] (stable co-sorting of
//! points and handles), [`squared_distance`]/[`distance`], [`brute_force`] (base cases of
//! at most [`BASE_CASE_MAX`] points) and [`strip_merge`].
//!
//! ## Features
//!
//! - `std` *(default)*: use `std` floating point. Disable and enable `libm` for `no_std`.
//! - `libm`: `no_std` floating point through `kurbo`'s `libm` support.
//! - `serde`: `Serialize`/`Deserialize` for frames, results, and configuration, using
//!   camelCase field names and a `type` tag per frame.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use pairtrace::{FrameKind, Solver};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 3.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(2.0, 1.0),
//!     Point::new(2.0, 2.0),
//! ];
//! let handles = [10_u32, 11, 12, 13, 14, 15];
//!
//! let mut solver = Solver::new();
//! let pair = solver.solve(&points, &handles).unwrap();
//! assert_eq!(pair.distance, 1.0);
//!
//! // The closest pair straddles the first dividing line, so the final strip scan finds it.
//! let last = &solver.frames().last().unwrap().kind;
//! assert!(matches!(last, FrameKind::StripClosest { improved_in_strip: true, .. }));
//! ```
//!
//! ### Float semantics
//!
//! Coordinates must be finite; NaN and infinities are rejected before a run starts.
//! Searches compare squared distances, and the root is taken once per recorded result.
//!
//! ### Concurrency
//!
//! A run is a single synchronous recursion. A [`FrameRecorder`] holds one run at a time;
//! independent runs need independent recorders.

#![no_std]

extern crate alloc;

mod brute_force;
mod config;
mod error;
mod frame;
mod metric;
mod order;
mod recorder;
mod solver;
mod strip;
mod types;

pub use brute_force::{BASE_CASE_MAX, brute_force};
pub use config::{SolverConfig, VisualBounds};
pub use error::{InputError, SolveError};
pub use frame::{Frame, FrameKind};
pub use metric::{distance, squared_distance};
pub use order::{OrderedView, sort_by};
pub use recorder::{Discard, FrameRecorder, FrameSink};
pub use solver::{Solver, closest_pair, solve_into};
pub use strip::strip_merge;
pub use types::{Axis, ClosestPair};
