use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Build the runner settings: struct defaults, then the config file if
    /// one exists, then `PLAYSIM__SECTION__KEY` variables such as
    /// `PLAYSIM__SIMULATION__INITIAL_DELAY_MS=250`.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("PLAYSIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings under which discovery could never find a scenario.
    pub fn validate(&self) -> Result<(), String> {
        let scenarios = &self.scenarios;
        if scenarios
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("scenarios.extensions must name at least one extension".to_string());
        }
        if scenarios.max_depth == Some(0) {
            return Err("scenarios.max_depth must be >= 1".to_string());
        }
        Ok(())
    }
}

/// `PLAYSIM_CONFIG_PATH` when set, otherwise `default_config_path()`.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("PLAYSIM_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `playsim/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
/// `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("playsim").join("config.toml"))
}
