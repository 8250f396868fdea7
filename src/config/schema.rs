use std::path::PathBuf;

use serde::Deserialize;

use crate::timer::PhaseConfig;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/pomotune/config.toml` or `~/.config/pomotune/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `POMOTUNE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timer: TimerSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Initial work phase length (minutes).
    pub work_minutes: u32,
    /// Initial break phase length (minutes).
    pub break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        let d = PhaseConfig::default();
        Self {
            work_minutes: d.work_minutes,
            break_minutes: d.break_minutes,
        }
    }
}

impl TimerSettings {
    pub fn phase_config(&self) -> PhaseConfig {
        PhaseConfig {
            work_minutes: self.work_minutes,
            break_minutes: self.break_minutes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory that relative soundscape paths are resolved against.
    /// Unset means the current working directory.
    pub asset_dir: Option<PathBuf>,
    /// Give up downloading a remote soundscape after this many seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            asset_dir: None,
            fetch_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ focus, then breathe ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file to append to. Nothing is logged when unset, since the
    /// terminal itself belongs to the UI.
    pub file: Option<PathBuf>,
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
