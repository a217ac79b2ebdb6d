//! # playsim
//!
//! A deterministic stand-in for a media player. Tests of media command logic
//! create a `FakePlayer` per track, feed it simulated time and react to the
//! events it reports, without a decoder or a real clock.
//!
//! Besides the player this crate carries the custom environment store handed
//! to documents under test and a TOML scenario format for replaying scripted
//! playback episodes from disk.

pub mod config;
pub mod environment;
pub mod error;
pub mod player;
pub mod scenario;

pub use environment::{EnvValue, EnvironmentConfig};
pub use error::ScenarioError;
pub use player::{
    Advance, ContentLength, FakePlayer, MediaTrack, PlayerEvent, PlayerState, RepeatCount,
    SimParams, TrackState,
};
