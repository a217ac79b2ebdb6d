//! Scenario files: a track, the fake content behind it and a script of
//! player operations, replayed deterministically into a transcript.
//!
//! Scenarios are TOML. Discovery walks directories the same way regardless
//! of where the runner is started from, and a run never depends on wall
//! clock time, so the same file always produces the same transcript.

mod model;
mod probe;
mod run;
mod scan;

pub use model::{Content, Expectation, Scenario, Step};
pub use probe::content_length_ms;
pub use run::{Entry, Outcome, Transcript, load, run, run_file, sim_params};
pub use scan::discover;
