//! Author-facing track description and the knobs that shape the fake content.

use serde::Deserialize;

/// How many times the playable window is traversed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum RepeatCount {
    /// Play the window this many times. Zero behaves like one.
    Times(u32),
    /// Loop until something else stops the track.
    Forever,
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::Times(1)
    }
}

impl From<i64> for RepeatCount {
    /// Negative values mean "repeat forever".
    fn from(raw: i64) -> Self {
        if raw < 0 {
            Self::Forever
        } else {
            Self::Times(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }
}

/// Length of the underlying content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum ContentLength {
    Finite(u64),
    /// Live or otherwise endless content.
    Unbounded,
}

impl From<i64> for ContentLength {
    /// Negative values mean unbounded content.
    fn from(raw: i64) -> Self {
        u64::try_from(raw).map_or(Self::Unbounded, Self::Finite)
    }
}

/// The track an author asked for: where to start and how much to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaTrack {
    /// Offset into the content where playback starts (milliseconds).
    pub offset: u64,
    /// Requested playing time (milliseconds). 0 plays to the end of the content.
    pub duration: u64,
    pub repeat_count: RepeatCount,
}

impl MediaTrack {
    pub fn new(offset: u64, duration: u64, repeat_count: RepeatCount) -> Self {
        Self {
            offset,
            duration,
            repeat_count,
        }
    }
}

/// Simulation parameters supplied by the test author.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimParams {
    /// Actual length of the content, which may disagree with the track.
    pub actual: ContentLength,
    /// Buffering delay before the first frame (milliseconds).
    pub initial_delay: u64,
    /// Milliseconds of playback that succeed before the content fails.
    pub fail_after: Option<u64>,
}

impl SimParams {
    pub fn new(actual: ContentLength, initial_delay: u64, fail_after: Option<u64>) -> Self {
        Self {
            actual,
            initial_delay,
            fail_after,
        }
    }

    /// Build parameters from raw integers, where negative lengths mean
    /// unbounded content and a negative `fail_after` means "never fails".
    pub fn from_raw(actual: i64, initial_delay: u64, fail_after: i64) -> Self {
        Self {
            actual: ContentLength::from(actual),
            initial_delay,
            fail_after: u64::try_from(fail_after).ok(),
        }
    }
}
