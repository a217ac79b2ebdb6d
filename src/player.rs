//! Deterministic playback simulator.
//!
//! `FakePlayer` stands in for a real media player when testing media command
//! logic: it buffers, plays, loops, seeks and fails purely as a function of
//! the time fed to it, so replaying the same operations always yields the
//! same events.

mod advance;
mod fake;
mod track;
mod types;

pub use fake::FakePlayer;
pub use track::{ContentLength, MediaTrack, RepeatCount, SimParams};
pub use types::{Advance, PlayerEvent, PlayerState, TrackState};

#[cfg(test)]
mod tests;
