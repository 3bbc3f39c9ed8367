// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame sinks: where a run sends its events.

use alloc::vec::Vec;

use crate::frame::{Frame, FrameKind};

/// Destination for the frames of a run.
///
/// The solver calls [`reset`][FrameSink::reset] once when a run starts, then
/// [`record`][FrameSink::record] once per event, in execution order. Concurrent
/// runs must each use their own sink.
pub trait FrameSink<H> {
    /// Forget everything from previous runs.
    fn reset(&mut self);

    /// Append one event.
    fn record(&mut self, kind: FrameKind<H>);
}

/// Append-only frame log for a single run.
///
/// Sequence numbers are assigned on [`record`][FrameSink::record] and always
/// run `0..len()` without gaps; [`reset`][FrameSink::reset] starts over at `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRecorder<H> {
    frames: Vec<Frame<H>>,
}

impl<H> Default for FrameRecorder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FrameRecorder<H> {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Frames of the most recent (or in-progress) run.
    pub fn frames(&self) -> &[Frame<H>] {
        &self.frames
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been recorded since the last reset.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Move the log out, leaving the recorder empty.
    pub fn take_frames(&mut self) -> Vec<Frame<H>> {
        core::mem::take(&mut self.frames)
    }
}

impl<H> FrameSink<H> for FrameRecorder<H> {
    fn reset(&mut self) {
        self.frames.clear();
    }

    fn record(&mut self, kind: FrameKind<H>) {
        let sequence_number = self.frames.len();
        tracing::trace!(sequence_number, frame = kind.name(), "recorded frame");
        self.frames.push(Frame {
            sequence_number,
            kind,
        });
    }
}

/// A sink that drops every frame, for callers that only want the answer.
#[derive(Copy, Clone, Debug, Default)]
pub struct Discard;

impl<H> FrameSink<H> for Discard {
    fn reset(&mut self) {}

    fn record(&mut self, _kind: FrameKind<H>) {}
}
