//! On-disk scenario schema.

use std::path::PathBuf;

use serde::Deserialize;

use crate::environment::EnvironmentConfig;
use crate::player::{MediaTrack, PlayerState, TrackState};

/// One simulated playback episode: a track, the content behind it and the
/// operations to perform.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Human readable name. Defaults to the file stem.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub track: MediaTrack,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Simulation knobs. Anything left out falls back to `[simulation]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Content {
    /// Actual content length in milliseconds, negative for unbounded content.
    pub length: Option<i64>,
    /// Media file whose duration becomes the content length.
    /// Relative paths are resolved against the scenario file.
    pub file: Option<PathBuf>,
    pub initial_delay: Option<u64>,
    /// Negative means the content never fails.
    pub fail_after: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Play,
    Pause,
    Rewind,
    Finish,
    ClearRepeat,
    Seek {
        offset: i64,
    },
    /// Exactly one `advance_time` call.
    Tick {
        ms: u64,
    },
    /// Keep advancing until `ms` milliseconds have passed.
    Advance {
        ms: u64,
    },
    Expect(Expectation),
}

/// Checks against the player after the preceding steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectation {
    pub state: Option<PlayerState>,
    pub track_state: Option<TrackState>,
    pub position: Option<u64>,
    pub loops: Option<u64>,
}

impl Step {
    /// Short label used in transcripts.
    pub fn label(&self) -> String {
        match self {
            Self::Play => "play".to_string(),
            Self::Pause => "pause".to_string(),
            Self::Rewind => "rewind".to_string(),
            Self::Finish => "finish".to_string(),
            Self::ClearRepeat => "clear_repeat".to_string(),
            Self::Seek { offset } => format!("seek {offset}"),
            Self::Tick { ms } => format!("tick {ms}"),
            Self::Advance { ms } => format!("advance {ms}"),
            Self::Expect(_) => "expect".to_string(),
        }
    }
}
