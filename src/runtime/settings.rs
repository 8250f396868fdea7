use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults when the config is missing or bad.
///
/// Logging is not set up yet at this point (its destination comes from the
/// settings), so problems are also returned for the caller to log later.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

pub fn report_config_problem(problem: Option<String>) {
    if let Some(msg) = problem {
        eprintln!("pomotune: {msg}");
        warn!("{msg}");
    }
}
