//! Session model: the `App` struct and its view snapshot.
//!
//! `App` is the single owner of the timer, its tick schedule and the active
//! soundscapes. Input handlers call its transition methods; the UI renders
//! whatever `App::view` returns.

use std::time::Instant;

use crate::soundscape::{PlaybackBackend, SoundTrack, Soundscape, catalog};
use crate::timer::{Phase, PhaseConfig, Ticker, TimerEngine};

/// Largest value a duration field accepts.
pub const MAX_MINUTES: u32 = 9999;

/// Which part of the screen receives editing keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Sounds,
    Work,
    Break,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Sounds
    }
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Sounds => Self::Work,
            Self::Work => Self::Break,
            Self::Break => Self::Sounds,
        }
    }

    fn phase(self) -> Option<Phase> {
        match self {
            Self::Sounds => None,
            Self::Work => Some(Phase::Work),
            Self::Break => Some(Phase::Break),
        }
    }
}

/// Format whole seconds as zero-padded `mm:ss`. Minutes are not capped at 59.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Coerce free-form duration input to minutes.
///
/// Leading ASCII digits are parsed after surrounding whitespace and one
/// optional `+`; anything without them becomes 0. Results are capped at
/// `MAX_MINUTES`.
pub fn parse_minutes(input: &str) -> u32 {
    let s = input.trim();
    let digits: String = s
        .strip_prefix('+')
        .unwrap_or(s)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u64>() {
        Ok(n) => n.min(MAX_MINUTES as u64) as u32,
        // Empty, or too many digits for u64.
        Err(_) if digits.is_empty() => 0,
        Err(_) => MAX_MINUTES,
    }
}

/// One soundscape row as the UI should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundToggle {
    pub name: &'static str,
    pub active: bool,
    pub selected: bool,
}

/// Everything the UI needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub phase_label: &'static str,
    pub clock: String,
    pub running: bool,
    pub start_label: &'static str,
    pub inputs_enabled: bool,
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub focus: Focus,
    pub sounds: Vec<SoundToggle>,
}

/// The main application model.
pub struct App<B: PlaybackBackend> {
    pub timer: TimerEngine,
    pub ticker: Ticker,
    pub sounds: Soundscape<B>,
    pub tracks: &'static [SoundTrack],
    pub focus: Focus,
    pub selected_sound: usize,
}

impl<B: PlaybackBackend> App<B> {
    /// Create an idle session at the start of a work phase.
    pub fn new(config: PhaseConfig, backend: B) -> Self {
        Self {
            timer: TimerEngine::new(config),
            ticker: Ticker::default(),
            sounds: Soundscape::new(backend),
            tracks: catalog(),
            focus: Focus::Sounds,
            selected_sound: 0,
        }
    }

    /// Start/pause button. Arms or cancels the tick schedule in the same step.
    pub fn toggle_timer(&mut self, now: Instant) {
        self.timer.toggle();
        self.sync_ticker(now);
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.ticker.cancel();
    }

    /// Process every tick that is due at `now`, one at a time.
    ///
    /// Returns the number of ticks applied. A phase flip stops the timer and
    /// with it the schedule, so no tick leaks into the next phase.
    pub fn poll_ticks(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while self.ticker.poll(now) {
            self.timer.tick();
            applied += 1;
            if !self.timer.is_running() {
                self.ticker.cancel();
            }
        }
        applied
    }

    fn sync_ticker(&mut self, now: Instant) {
        match (self.timer.is_running(), self.ticker.is_armed()) {
            (true, false) => self.ticker.arm(now),
            (false, true) => self.ticker.cancel(),
            _ => {}
        }
    }

    /// Toggle the catalog track at `index`; out-of-range indices are ignored.
    pub fn toggle_sound(&mut self, index: usize) {
        if let Some(track) = self.tracks.get(index) {
            self.sounds.toggle(track);
        }
    }

    pub fn toggle_selected_sound(&mut self) {
        self.toggle_sound(self.selected_sound);
    }

    pub fn select_next_sound(&mut self) {
        if !self.tracks.is_empty() {
            self.selected_sound = (self.selected_sound + 1) % self.tracks.len();
        }
    }

    pub fn select_prev_sound(&mut self) {
        if !self.tracks.is_empty() {
            self.selected_sound = match self.selected_sound {
                0 => self.tracks.len() - 1,
                n => n - 1,
            };
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    fn focused_minutes(&self) -> Option<(Phase, u32)> {
        let phase = self.focus.phase()?;
        Some((phase, self.timer.config().minutes(phase)))
    }

    /// Write `minutes` into the focused field. No-op while running or when no
    /// field has focus.
    fn set_focused(&mut self, minutes: u32) {
        let minutes = minutes.min(MAX_MINUTES);
        match self.focus.phase() {
            Some(Phase::Work) => self.timer.set_work_minutes(minutes),
            Some(Phase::Break) => self.timer.set_break_minutes(minutes),
            None => false,
        };
    }

    /// Type a digit into the focused field.
    pub fn push_digit(&mut self, digit: u32) {
        if let Some((_, current)) = self.focused_minutes() {
            let next = current.saturating_mul(10).saturating_add(digit % 10);
            if next <= MAX_MINUTES {
                self.set_focused(next);
            }
        }
    }

    /// Delete the last digit of the focused field; emptying it yields 0.
    pub fn pop_digit(&mut self) {
        if let Some((_, current)) = self.focused_minutes() {
            self.set_focused(current / 10);
        }
    }

    /// Replace the focused field with pasted text, coerced by `parse_minutes`.
    pub fn paste(&mut self, text: &str) {
        self.set_focused(parse_minutes(text));
    }

    /// Nudge the focused field up or down, never below 0.
    pub fn adjust(&mut self, delta: i64) {
        if let Some((_, current)) = self.focused_minutes() {
            let next = (current as i64 + delta).clamp(0, MAX_MINUTES as i64);
            self.set_focused(next as u32);
        }
    }

    /// Snapshot of everything the UI shows.
    pub fn view(&self) -> View {
        let running = self.timer.is_running();
        let config = self.timer.config();
        View {
            phase_label: self.timer.phase().label(),
            clock: format_time(self.timer.remaining_secs()),
            running,
            start_label: if running { "Pause" } else { "Start" },
            inputs_enabled: !running,
            work_minutes: config.work_minutes,
            break_minutes: config.break_minutes,
            focus: self.focus,
            sounds: self
                .tracks
                .iter()
                .enumerate()
                .map(|(i, t)| SoundToggle {
                    name: t.name,
                    active: self.sounds.is_active(t.id),
                    selected: self.focus == Focus::Sounds && i == self.selected_sound,
                })
                .collect(),
        }
    }

    /// Stop every soundscape; called when the session ends.
    pub fn shutdown(&mut self) {
        self.ticker.cancel();
        self.sounds.stop_all();
    }
}
