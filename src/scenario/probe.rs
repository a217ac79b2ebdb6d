//! Real media files as the source of a fake content length.

use std::path::Path;

use lofty::prelude::AudioFile;

use crate::error::{Result, ScenarioError};

/// Read the duration of the media file at `path` in milliseconds.
pub fn content_length_ms(path: &Path) -> Result<u64> {
    let tagged = lofty::read_from_path(path).map_err(|err| ScenarioError::Probe {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let duration = tagged.properties().duration();
    Ok(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
