//! Loading a scenario, building its player and replaying its steps.

use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::config::{Settings, SimulationSettings};
use crate::error::{Result, ScenarioError};
use crate::player::{Advance, ContentLength, FakePlayer, PlayerEvent, PlayerState, SimParams};

use super::model::{Expectation, Scenario, Step};
use super::probe::content_length_ms;

/// Parse the scenario file at `path`.
pub fn load(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the simulation knobs of `scenario`, probing its media file if it
/// names one. Relative media paths are resolved against `base_dir`.
pub fn sim_params(
    scenario: &Scenario,
    base_dir: &Path,
    defaults: &SimulationSettings,
) -> Result<SimParams> {
    let content = &scenario.content;
    let actual = match (&content.file, content.length) {
        (Some(file), _) => ContentLength::Finite(content_length_ms(&base_dir.join(file))?),
        (None, Some(length)) => ContentLength::from(length),
        (None, None) => ContentLength::from(defaults.content_length_ms),
    };
    let initial_delay = content.initial_delay.unwrap_or(defaults.initial_delay_ms);
    let fail_after = content.fail_after.unwrap_or(defaults.fail_after_ms);

    Ok(SimParams::new(
        actual,
        initial_delay,
        u64::try_from(fail_after).ok(),
    ))
}

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Result of a control operation: did the player change.
    Control(bool),
    /// One `advance_time` call and the player right after it.
    Advanced {
        advance: Advance,
        position: u64,
        state: PlayerState,
    },
    /// An expectation held.
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Index of the step in the scenario.
    pub step: usize,
    /// Simulated clock after the step (milliseconds).
    pub clock: u64,
    pub label: String,
    pub outcome: Outcome,
}

/// Ordered record of everything a scenario run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub name: String,
    /// The player as created, before any step ran.
    pub player: String,
    /// Accepted custom environment names.
    pub environment: Vec<String>,
    pub entries: Vec<Entry>,
}

impl Transcript {
    /// Events reported by every `advance_time` call, in order.
    pub fn events(&self) -> Vec<PlayerEvent> {
        self.entries
            .iter()
            .filter_map(|e| match &e.outcome {
                Outcome::Advanced { advance, .. } => Some(advance.event),
                _ => None,
            })
            .collect()
    }

    /// Simulated time covered by the run.
    pub fn clock(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.clock)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {}", self.name)?;
        writeln!(f, "   {}", self.player)?;
        if !self.environment.is_empty() {
            writeln!(f, "   environment: {}", self.environment.join(", "))?;
        }
        for entry in &self.entries {
            write!(f, "[{:>8}] #{} {}", entry.clock, entry.step, entry.label)?;
            match &entry.outcome {
                Outcome::Control(changed) => writeln!(f, " -> {changed}")?,
                Outcome::Advanced {
                    advance,
                    position,
                    state,
                } => writeln!(
                    f,
                    " -> {} +{} position={} state={}",
                    advance.event, advance.consumed, position, state
                )?,
                Outcome::Checked => writeln!(f, " -> ok")?,
            }
        }
        Ok(())
    }
}

/// Replay the steps of `scenario` against `player`.
///
/// Stops at the first expectation that does not hold.
pub fn run(scenario: &Scenario, name: &str, mut player: FakePlayer) -> Result<Transcript> {
    info!("scenario '{name}': {} steps", scenario.steps.len());

    let mut transcript = Transcript {
        name: name.to_string(),
        player: player.to_string(),
        environment: scenario
            .environment
            .sorted_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        entries: Vec::new(),
    };
    let mut clock: u64 = 0;

    for (index, step) in scenario.steps.iter().enumerate() {
        let label = step.label();
        let mut record = |clock: u64, outcome: Outcome| {
            transcript.entries.push(Entry {
                step: index,
                clock,
                label: label.clone(),
                outcome,
            });
        };

        match step {
            Step::Play => record(clock, Outcome::Control(player.play())),
            Step::Pause => record(clock, Outcome::Control(player.pause())),
            Step::Rewind => record(clock, Outcome::Control(player.rewind())),
            Step::Finish => record(clock, Outcome::Control(player.finish())),
            Step::ClearRepeat => record(clock, Outcome::Control(player.clear_repeat())),
            Step::Seek { offset } => record(clock, Outcome::Control(player.seek(*offset))),
            Step::Tick { ms } => {
                let advance = player.advance_time(*ms);
                clock = clock.saturating_add(advance.consumed);
                record(clock, advanced(advance, &player));
            }
            Step::Advance { ms } => {
                let mut remaining = *ms;
                while remaining > 0 {
                    let advance = player.advance_time(remaining);
                    remaining -= advance.consumed;
                    clock = clock.saturating_add(advance.consumed);
                    record(clock, advanced(advance, &player));
                }
            }
            Step::Expect(expectation) => {
                check(expectation, &player).map_err(|detail| ScenarioError::Expectation {
                    step: index,
                    detail,
                })?;
                record(clock, Outcome::Checked);
            }
        }
        debug!("scenario '{name}': after #{index} {player}");
    }

    info!(
        "scenario '{name}': finished at {clock} ms in state {}",
        player.state()
    );
    Ok(transcript)
}

/// Load, build and run the scenario file at `path`.
pub fn run_file(path: &Path, settings: &Settings) -> Result<Transcript> {
    let scenario = load(path)?;
    let name = scenario.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    });
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let params = sim_params(&scenario, base_dir, &settings.simulation)?;
    let player = FakePlayer::create(&scenario.track, params);
    run(&scenario, &name, player)
}

fn advanced(advance: Advance, player: &FakePlayer) -> Outcome {
    Outcome::Advanced {
        advance,
        position: player.position(),
        state: player.state(),
    }
}

fn check(expectation: &Expectation, player: &FakePlayer) -> std::result::Result<(), String> {
    let mut problems = Vec::new();
    if let Some(state) = expectation.state {
        if player.state() != state {
            problems.push(format!("state is {} (expected {state})", player.state()));
        }
    }
    if let Some(track_state) = expectation.track_state {
        if player.track_state() != track_state {
            problems.push(format!(
                "track state is {} (expected {track_state})",
                player.track_state()
            ));
        }
    }
    if let Some(position) = expectation.position {
        if player.position() != position {
            problems.push(format!(
                "position is {} (expected {position})",
                player.position()
            ));
        }
    }
    if let Some(loops) = expectation.loops {
        if player.completed_loops() != loops {
            problems.push(format!(
                "completed loops is {} (expected {loops})",
                player.completed_loops()
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("; "))
    }
}
