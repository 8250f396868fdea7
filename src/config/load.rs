use std::{env, path::PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

/// Overrides the config file location outright.
const CONFIG_PATH_VAR: &str = "POMOTUNE_CONFIG_PATH";
/// Nested keys use `__`, e.g. `POMOTUNE__TIMER__WORK_MINUTES=50`.
const ENV_PREFIX: &str = "POMOTUNE";

impl Settings {
    /// Build settings from struct defaults, then the config file (if present),
    /// then `POMOTUNE__*` variables, later layers winning.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values that would leave a session unusable.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("timer.work_minutes", u64::from(self.timer.work_minutes)),
            ("timer.break_minutes", u64::from(self.timer.break_minutes)),
            ("audio.fetch_timeout_secs", self.audio.fetch_timeout_secs),
        ];
        match checks.iter().find(|(_, v)| *v == 0) {
            Some((key, _)) => Err(format!("{key} must be >= 1")),
            None => Ok(()),
        }
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `pomotune/config.toml` under the XDG config home, which itself defaults
/// to `$HOME/.config`. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("pomotune").join("config.toml"))
}
