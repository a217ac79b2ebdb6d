//! Small playback types shared by the simulator.
//!
//! This module defines the events reported while time passes, the internal
//! lifecycle of a simulated track and the coarse track status exposed to the
//! media command logic under test.

use std::fmt;

use serde::Deserialize;

/// Events produced by `FakePlayer::advance_time`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The play head changed position.
    TimeUpdate,
    /// The track finished buffering and is ready to start playing.
    TrackReady,
    /// The track reached the end of its last repeat.
    /// An infinitely repeating track never reports this.
    TrackDone,
    /// The track crashed and entered the `Failed` state.
    TrackFail,
    /// Nothing worth reporting happened.
    NoReport,
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TimeUpdate => "TIME_UPDATE",
            Self::TrackReady => "TRACK_READY",
            Self::TrackDone => "TRACK_DONE",
            Self::TrackFail => "TRACK_FAIL",
            Self::NoReport => "NO_REPORT",
        };
        f.write_str(name)
    }
}

/// Lifecycle of a simulated track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// Not attempting to play. Buffering still drains as time passes.
    Idle,
    /// Buffering or playing, looping as the repeat count allows.
    Playing,
    /// Finished playing and repeating. The play head is parked at the end and
    /// the loop counter at its maximum. Rewinding or seeking can leave this state.
    Done,
    /// The content crashed. Play head and loop counter are frozen and the
    /// track never leaves this state.
    Failed,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Track status as seen by event handlers of the surrounding engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackState {
    #[serde(alias = "not_ready", alias = "notready")]
    NotReady,
    Ready,
    Failed,
}

impl fmt::Display for TrackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotReady => "not-ready",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a single `advance_time` call: the event that stopped time and
/// how many milliseconds actually passed before it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Advance {
    pub event: PlayerEvent,
    pub consumed: u64,
}

impl Advance {
    pub(crate) fn new(event: PlayerEvent, consumed: u64) -> Self {
        Self { event, consumed }
    }
}
