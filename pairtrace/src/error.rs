// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// Why an input set was refused before the run started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// No points were supplied.
    #[error("no points supplied")]
    Empty,
    /// A single point has no pair.
    #[error("a single point has no closest pair")]
    SinglePoint,
    /// Points and handles are not parallel sequences.
    #[error("{points} points but {handles} handles")]
    LengthMismatch {
        /// Number of points.
        points: usize,
        /// Number of handles.
        handles: usize,
    },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Input index of the offending point.
        index: usize,
    },
}

/// Failure of a closest-pair run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The input contract was violated; nothing was solved.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// Fewer than two points reached the brute-force base case.
    #[error("base case reached with {len} point(s), at least 2 are required")]
    DegenerateBaseCase {
        /// Number of points that reached the base case.
        len: usize,
    },
}
