use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::load::{default_config_path, resolve_config_path};
use super::schema::*;

/// Process environment is global; tests touching it take turns.
static ENV: Mutex<()> = Mutex::new(());

/// Run `f` with each variable set (`Some`) or removed (`None`), restoring the
/// previous values afterwards even if `f` panics.
fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    struct Restore(Vec<(String, Option<OsString>)>);

    impl Drop for Restore {
        fn drop(&mut self) {
            for (key, old) in self.0.drain(..) {
                // SAFETY: serialised by `ENV`.
                unsafe {
                    match old {
                        Some(v) => std::env::set_var(&key, v),
                        None => std::env::remove_var(&key),
                    }
                }
            }
        }
    }

    let _lock = ENV.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore(
        vars.iter()
            .map(|(key, _)| (key.to_string(), std::env::var_os(key)))
            .collect(),
    );
    for (key, val) in vars {
        // SAFETY: serialised by `ENV`.
        unsafe {
            match val {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
    f()
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn explicit_config_path_wins_over_xdg() {
    let p = with_env(
        &[
            ("POMOTUNE_CONFIG_PATH", Some("/tmp/pomotune-test-config.toml")),
            ("XDG_CONFIG_HOME", Some("/tmp/xdg-ignored")),
        ],
        resolve_config_path,
    );
    assert_eq!(p, Some(PathBuf::from("/tmp/pomotune-test-config.toml")));
}

#[test]
fn config_path_lives_under_xdg_config_home() {
    let p = with_env(
        &[
            ("POMOTUNE_CONFIG_PATH", None),
            ("XDG_CONFIG_HOME", Some("/tmp/xdg")),
            ("HOME", Some("/tmp/home-unused")),
        ],
        resolve_config_path,
    );
    assert_eq!(p, Some(PathBuf::from("/tmp/xdg/pomotune/config.toml")));
}

#[test]
fn config_path_falls_back_to_home_dot_config() {
    let p = with_env(
        &[("XDG_CONFIG_HOME", None), ("HOME", Some("/tmp/someone"))],
        default_config_path,
    );
    assert_eq!(
        p,
        Some(PathBuf::from("/tmp/someone/.config/pomotune/config.toml"))
    );
}

#[test]
fn no_config_path_without_xdg_or_home() {
    let p = with_env(&[("XDG_CONFIG_HOME", None), ("HOME", None)], default_config_path);
    assert_eq!(p, None);
}

#[test]
fn defaults_match_classic_pomodoro() {
    let s = Settings::default();
    assert_eq!(s.timer.work_minutes, 25);
    assert_eq!(s.timer.break_minutes, 5);
    assert_eq!(s.audio.fetch_timeout_secs, 30);
    assert!(s.audio.asset_dir.is_none());
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        dir.path(),
        r#"
[timer]
work_minutes = 50
break_minutes = 10

[audio]
asset_dir = "/srv/pomotune"
fetch_timeout_secs = 5

[ui]
header_text = "hello"

[logging]
file = "/tmp/pomotune.log"
level = "debug"
"#,
    );

    let s = with_env(
        &[
            ("POMOTUNE_CONFIG_PATH", cfg_path.to_str()),
            ("POMOTUNE__TIMER__WORK_MINUTES", None),
        ],
        Settings::load,
    )
    .unwrap();

    assert_eq!(s.timer.work_minutes, 50);
    assert_eq!(s.timer.break_minutes, 10);
    assert_eq!(s.audio.asset_dir, Some(PathBuf::from("/srv/pomotune")));
    assert_eq!(s.audio.fetch_timeout_secs, 5);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.logging.file, Some(PathBuf::from("/tmp/pomotune.log")));
    assert_eq!(s.logging.level, "debug");

    let pc = s.timer.phase_config();
    assert_eq!((pc.work_minutes, pc.break_minutes), (50, 10));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");

    let s = with_env(
        &[
            ("POMOTUNE_CONFIG_PATH", absent.to_str()),
            ("POMOTUNE__TIMER__WORK_MINUTES", None),
        ],
        Settings::load,
    )
    .unwrap();

    assert_eq!(s.timer.work_minutes, 25);
    assert_eq!(s.timer.break_minutes, 5);
}

#[test]
fn settings_env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(dir.path(), "[timer]\nwork_minutes = 50\nbreak_minutes = 10\n");

    let s = with_env(
        &[
            ("POMOTUNE_CONFIG_PATH", cfg_path.to_str()),
            ("POMOTUNE__TIMER__WORK_MINUTES", Some("45")),
        ],
        Settings::load,
    )
    .unwrap();

    assert_eq!(s.timer.work_minutes, 45);
    assert_eq!(s.timer.break_minutes, 10);
}

#[test]
fn validate_rejects_zero_durations_and_timeout() {
    let mut s = Settings::default();
    s.timer.work_minutes = 0;
    assert!(s.validate().unwrap_err().contains("work_minutes"));

    let mut s = Settings::default();
    s.timer.break_minutes = 0;
    assert!(s.validate().unwrap_err().contains("break_minutes"));

    let mut s = Settings::default();
    s.audio.fetch_timeout_secs = 0;
    assert!(s.validate().unwrap_err().contains("fetch_timeout_secs"));
}
