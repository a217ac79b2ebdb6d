use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playsim/config.toml` or
/// `~/.config/playsim/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYSIM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub scenarios: ScenarioSettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            scenarios: ScenarioSettings::default(),
            log: LogSettings::default(),
        }
    }
}

/// Fallback simulation knobs for scenarios that leave them out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Buffering delay before the first frame (milliseconds).
    pub initial_delay_ms: u64,
    /// Milliseconds of playback before the content fails.
    /// Negative values mean the content never fails.
    pub fail_after_ms: i64,
    /// Actual content length (milliseconds).
    /// Negative values mean unbounded content.
    pub content_length_ms: i64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            initial_delay_ms: 0,
            fail_after_ms: -1,
            content_length_ms: -1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioSettings {
    /// File extensions to treat as scenarios (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during discovery.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["toml".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Minimum level written by the binary. `RUST_LOG` takes precedence.
    pub level: LogLevel,
    /// Whether log lines go to stderr at all.
    pub stderr: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            stderr: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    #[serde(alias = "none")]
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
