//! The `FakePlayer` model: immutable track parameters, mutable playback
//! state, the query surface and the instantaneous control operations.
//!
//! Time only moves through `advance_time` (see `advance.rs`); everything in
//! this file happens at a single simulated instant and never reports events.

use std::fmt;

use log::debug;

use super::track::{ContentLength, MediaTrack, RepeatCount, SimParams};
use super::types::{PlayerState, TrackState};

/// A model of a media player that plays and repeats a single track.
///
/// The player is always created `Idle`. Under normal use `play()` is called
/// and time is fed in with `advance_time`: `TrackReady` is reported first,
/// followed by some number of `TimeUpdate`s and a final `TrackDone`. If a
/// failure point was configured and is reached first, `TrackFail` is reported
/// instead and the player never leaves `Failed`.
///
/// When the track repeats, the play head goes back to `start` for every new
/// loop and is only parked at `end` after the last one. With `start=0`,
/// `end=1000`, two repeats and 250 ms steps the reported positions are
/// `0, 250, 500, 750, 0, 250, 500, 750, 1000`.
#[derive(Debug, Clone)]
pub struct FakePlayer {
    pub(super) requested_duration: u64,
    pub(super) repeat_count: RepeatCount,
    pub(super) fail_after: Option<u64>,
    pub(super) start: u64,
    /// `None` plays forever.
    pub(super) duration: Option<u64>,

    pub(super) buffering: u64,
    pub(super) position: u64,
    pub(super) completed_loops: u64,
    /// Milliseconds the play head actually moved, across all loops.
    pub(super) elapsed: u64,
    pub(super) state: PlayerState,
    pub(super) ready_dispatched: bool,
}

impl FakePlayer {
    /// Create a player for `track`, clipping the requested window against
    /// the content described by `params`.
    ///
    /// If the requested window falls outside the actual content the playable
    /// duration is zero: the track goes from ready straight to done, ignoring
    /// all repeats.
    pub fn create(track: &MediaTrack, params: SimParams) -> Self {
        let requested = (track.duration > 0).then_some(track.duration);
        let (start, duration) = match params.actual {
            ContentLength::Finite(length) => {
                let start = track.offset.min(length);
                let available = length - start;
                (start, Some(requested.map_or(available, |d| d.min(available))))
            }
            ContentLength::Unbounded => (track.offset, requested),
        };

        Self::new(
            track.duration,
            track.repeat_count,
            params.fail_after,
            start,
            duration,
            params.initial_delay,
        )
    }

    pub fn new(
        requested_duration: u64,
        repeat_count: RepeatCount,
        fail_after: Option<u64>,
        start: u64,
        duration: Option<u64>,
        initial_delay: u64,
    ) -> Self {
        debug!(
            "fake player: start={start} duration={duration:?} repeat={repeat_count:?} \
             delay={initial_delay} fail_after={fail_after:?}"
        );
        Self {
            requested_duration,
            repeat_count,
            fail_after,
            start,
            duration,
            buffering: initial_delay,
            position: start,
            completed_loops: 0,
            elapsed: 0,
            state: PlayerState::Idle,
            ready_dispatched: false,
        }
    }

    /// Track status for event handlers: failed, ready once buffering has
    /// drained, otherwise not ready.
    pub fn track_state(&self) -> TrackState {
        if self.state == PlayerState::Failed {
            TrackState::Failed
        } else if self.buffering == 0 {
            TrackState::Ready
        } else {
            TrackState::NotReady
        }
    }

    /// Current play head position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Requested duration of the track. This is not guaranteed to match the
    /// actual playing time, see `start()`/`end()`.
    pub fn duration(&self) -> u64 {
        self.requested_duration
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// End of the playable window, `None` when the track plays forever.
    pub fn end(&self) -> Option<u64> {
        self.duration.map(|d| self.start.saturating_add(d))
    }

    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    pub fn completed_loops(&self) -> u64 {
        self.completed_loops
    }

    /// Milliseconds of playback so far. This is what `fail_after` counts.
    pub fn elapsed_playback(&self) -> u64 {
        self.elapsed
    }

    /// Buffering time left before the track is ready.
    pub fn buffering_remaining(&self) -> u64 {
        self.buffering
    }

    /// True if the player has not finished or failed yet.
    pub fn is_active(&self) -> bool {
        matches!(self.state, PlayerState::Idle | PlayerState::Playing)
    }

    /// True if the player is done playing, either `Done` or `Failed`.
    pub fn is_ended(&self) -> bool {
        matches!(self.state, PlayerState::Done | PlayerState::Failed)
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// True if the play head is at the very start and no loop completed yet.
    pub fn at_start(&self) -> bool {
        self.position == self.start && self.completed_loops == 0
    }

    /// Start playing (or buffering). Returns true if the player started.
    pub fn play(&mut self) -> bool {
        if self.state != PlayerState::Idle {
            return false;
        }
        self.set_state(PlayerState::Playing);
        true
    }

    /// Returns true if the player actually paused.
    pub fn pause(&mut self) -> bool {
        if self.state != PlayerState::Playing {
            return false;
        }
        self.set_state(PlayerState::Idle);
        true
    }

    /// Rewind to the beginning and clear the loop counter. No buffering is
    /// required afterwards.
    ///
    /// A track with no playable duration cannot be rewound once it is done.
    /// Returns true if anything changed.
    pub fn rewind(&mut self) -> bool {
        match self.state {
            PlayerState::Failed => return false,
            PlayerState::Done if self.duration == Some(0) => return false,
            _ => {}
        }

        let changed = !self.at_start() || self.state != PlayerState::Idle;
        self.position = self.start;
        self.completed_loops = 0;
        self.buffering = 0;
        self.set_state(PlayerState::Idle);
        changed
    }

    /// Force the track to done, unless it already failed.
    ///
    /// An endless track has no end to park at, so its play head goes back to
    /// the start. Returns true if the player actually finished.
    pub fn finish(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.position = self.end().unwrap_or(self.start);
        self.mark_done();
        true
    }

    /// Move the play head to `start + offset`, clipped to the playable window.
    ///
    /// Seeking to the end with no repeats left finishes the track; seeking a
    /// finished track to an earlier spot sets it back to `Idle`. Returns true
    /// if the play head moved.
    pub fn seek(&mut self, offset: i64) -> bool {
        if self.state == PlayerState::Failed {
            return false;
        }

        let target = self.clip_position(offset);
        let moved = target != self.position;
        self.position = target;

        let at_end = self.end() == Some(target);
        if at_end {
            if !self.repeats_remaining() && self.state != PlayerState::Done {
                self.mark_done();
            }
        } else if self.state == PlayerState::Done {
            self.set_state(PlayerState::Idle);
        }
        moved
    }

    /// Clear the loop counter of a finished track so it can play again.
    /// Returns true if the track was done with at least one loop and is now idle.
    pub fn clear_repeat(&mut self) -> bool {
        if self.state != PlayerState::Done || self.completed_loops == 0 {
            return false;
        }
        self.completed_loops = 0;
        self.set_state(PlayerState::Idle);
        true
    }

    /// Whether reaching the end of the window starts another loop.
    pub(super) fn repeats_remaining(&self) -> bool {
        match self.repeat_count {
            RepeatCount::Forever => true,
            RepeatCount::Times(k) => self.completed_loops.saturating_add(1) < u64::from(k),
        }
    }

    /// Enter `Done`, parking the loop counter at its maximum.
    pub(super) fn mark_done(&mut self) {
        if let RepeatCount::Times(k) = self.repeat_count {
            self.completed_loops = u64::from(k);
        }
        self.set_state(PlayerState::Done);
    }

    pub(super) fn set_state(&mut self, next: PlayerState) {
        if self.state != next {
            debug!(
                "fake player: {} -> {} at position {}",
                self.state, next, self.position
            );
            self.state = next;
        }
    }

    fn clip_position(&self, offset: i64) -> u64 {
        let target = match u64::try_from(offset) {
            Ok(forward) => self.start.saturating_add(forward),
            Err(_) => self.start,
        };
        match self.end() {
            Some(end) => target.min(end),
            None => target,
        }
    }
}

impl fmt::Display for FakePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self
            .end()
            .map_or_else(|| "inf".to_string(), |e| e.to_string());
        let repeat = match self.repeat_count {
            RepeatCount::Times(k) => k.to_string(),
            RepeatCount::Forever => "inf".to_string(),
        };
        write!(
            f,
            "FakePlayer<state={} position={} window=[{}, {}] loops={}/{} buffering={} elapsed={}>",
            self.state,
            self.position,
            self.start,
            end,
            self.completed_loops,
            repeat,
            self.buffering,
            self.elapsed
        )
    }
}
