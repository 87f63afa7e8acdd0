//! Indexed playback over a completed [`TrajectorySet`].
//!
//! The core never streams partial results; playback is a pure indexing
//! problem over frozen arrays. An external animation driver supplies wall
//! clock deltas and this crate maps elapsed simulated time onto frames,
//! clamping out-of-range times instead of failing — the guard the core
//! delegates to its consumers.

use gravity_core::vector::Vector2;
use gravity_sim::TrajectorySet;

/// Positions of every body at one playback instant.
///
/// Frame 0 is the initial state; frame `k > 0` is the sample recorded by
/// step `k - 1`. A run of N steps therefore has N + 1 frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub time: f64,
    pub positions: Vec<Vector2>,
}

/// Number of playback frames, initial state included.
pub fn frame_count(tracks: &TrajectorySet) -> usize {
    tracks.step_count() + 1
}

/// Frame at `elapsed` seconds of simulated time: `floor(elapsed /
/// time_step)`, clamped into the recorded range. Negative times map to the
/// initial frame; times past the simulated duration map to the final frame.
pub fn frame_at(tracks: &TrajectorySet, elapsed: f64) -> Frame {
    let time_step = tracks.time_step();
    let raw = if elapsed <= 0.0 {
        0
    } else {
        (elapsed / time_step).floor() as usize
    };
    let index = raw.min(tracks.step_count());

    let positions = tracks
        .tracks()
        .iter()
        .map(|track| match index {
            0 => track.initial().position,
            k => track.samples()[k - 1].position,
        })
        .collect();

    Frame {
        index,
        time: index as f64 * time_step,
        positions,
    }
}

/// Elapsed-time accumulator for externally driven playback.
///
/// Advancing while paused is a no-op, so a driver can keep feeding wall
/// clock deltas and pause/resume without its own bookkeeping. No timers
/// live here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playhead {
    elapsed: f64,
    paused: bool,
}

impl Playhead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `delta` seconds unless paused.
    pub fn advance(&mut self, delta: f64) {
        if !self.paused {
            self.elapsed += delta;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Rewind to the initial frame, keeping the paused flag.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Current frame for this playhead.
    pub fn frame(&self, tracks: &TrajectorySet) -> Frame {
        frame_at(tracks, self.elapsed)
    }
}
