//! Countdown state machine alternating between work and break phases.
//!
//! ```text
//! Idle(Work) <-> Running(Work)
//!     ^               | remaining reaches 0
//!     |               v
//! Running(Break) <-> Idle(Break)
//! ```
//!
//! Reaching zero flips the phase and stops the engine; the next phase only
//! runs once the user starts it again.

use tracing::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Work
    }
}

impl Phase {
    /// The phase that follows this one.
    pub fn other(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work Time",
            Self::Break => "Break Time",
        }
    }
}

/// User-chosen phase lengths, in minutes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhaseConfig {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl PhaseConfig {
    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    pub fn duration_secs(&self, phase: Phase) -> u32 {
        self.minutes(phase).saturating_mul(60)
    }
}

/// Emitted by `TimerEngine::tick` when a countdown runs out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: PhaseConfig,
    phase: Phase,
    remaining_secs: u32,
    running: bool,
}

impl TimerEngine {
    /// Create an idle engine at the start of a work phase.
    pub fn new(config: PhaseConfig) -> Self {
        Self {
            config,
            phase: Phase::Work,
            remaining_secs: config.duration_secs(Phase::Work),
            running: false,
        }
    }

    pub fn config(&self) -> PhaseConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Back to an idle work phase with the full work duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.remaining_secs = self.config.duration_secs(Phase::Work);
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while idle. The tick that would bring the countdown to
    /// zero (or finds it already there) flips the phase instead, stops the
    /// engine and loads the next phase's full duration in one step.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.running {
            return None;
        }

        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }

        let change = PhaseChange {
            from: self.phase,
            to: self.phase.other(),
        };
        self.phase = change.to;
        self.running = false;
        self.remaining_secs = self.config.duration_secs(self.phase);
        info!(from = ?change.from, to = ?change.to, "phase finished");
        Some(change)
    }

    /// Returns `false` (and changes nothing) while the timer is running.
    pub fn set_work_minutes(&mut self, minutes: u32) -> bool {
        self.set_minutes(Phase::Work, minutes)
    }

    /// Returns `false` (and changes nothing) while the timer is running.
    pub fn set_break_minutes(&mut self, minutes: u32) -> bool {
        self.set_minutes(Phase::Break, minutes)
    }

    fn set_minutes(&mut self, phase: Phase, minutes: u32) -> bool {
        if self.running {
            return false;
        }

        match phase {
            Phase::Work => self.config.work_minutes = minutes,
            Phase::Break => self.config.break_minutes = minutes,
        }
        if phase == self.phase {
            self.remaining_secs = self.config.duration_secs(phase);
        }
        true
    }
}
