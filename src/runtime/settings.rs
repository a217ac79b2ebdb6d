use playsim::config::Settings;

/// Settings for this run. A broken or invalid config file never stops the
/// scenarios from running: the problem is reported and defaults are used.
pub fn load_settings() -> Settings {
    let checked = match Settings::load() {
        Ok(settings) => match settings.validate() {
            Ok(()) => Ok(settings),
            Err(e) => Err(format!("invalid config: {e}")),
        },
        Err(e) => Err(format!("failed to load config: {e}")),
    };

    checked.unwrap_or_else(|msg| {
        eprintln!("playsim: {msg}, using defaults");
        Settings::default()
    })
}
