use super::enums::{TimerMode, TimerStatus};
use super::settings::TimerSettings;

/// What a timer transition did, in order of occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    Reset,
    /// Manual advance to the next interval
    Skipped { from: TimerMode, to: TimerMode },
    /// Countdown reached zero and the timer advanced on its own
    Expired { from: TimerMode, to: TimerMode },
}

/// Countdown state machine for work / break intervals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub mode: TimerMode,
    pub status: TimerStatus,
    pub time_left_secs: u64,
    pub sessions_completed: u32,
}

impl Timer {
    /// Fresh timer at the start of a work interval
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            mode: TimerMode::Work,
            status: TimerStatus::Stopped,
            time_left_secs: settings.duration_secs(TimerMode::Work),
            sessions_completed: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Begin or resume counting down
    pub fn start(&mut self) -> Option<TimerEvent> {
        if self.status == TimerStatus::Running {
            return None;
        }
        self.status = TimerStatus::Running;
        Some(TimerEvent::Started)
    }

    pub fn pause(&mut self) -> Option<TimerEvent> {
        if self.status != TimerStatus::Running {
            return None;
        }
        self.status = TimerStatus::Paused;
        Some(TimerEvent::Paused)
    }

    /// Back to a stopped work interval with the session count cleared
    pub fn reset(&mut self, settings: &TimerSettings) -> TimerEvent {
        self.status = TimerStatus::Stopped;
        self.mode = TimerMode::Work;
        self.time_left_secs = settings.duration_secs(TimerMode::Work);
        self.sessions_completed = 0;
        TimerEvent::Reset
    }

    /// Jump to the next interval regardless of time left
    pub fn skip(&mut self, settings: &TimerSettings) -> TimerEvent {
        let from = self.mode;
        let to = self.advance(settings);
        TimerEvent::Skipped { from, to }
    }

    /// Count down one second. Reaching zero advances the interval in the same tick.
    pub fn tick(&mut self, settings: &TimerSettings) -> Option<TimerEvent> {
        if self.status != TimerStatus::Running {
            return None;
        }

        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs > 0 {
            return None;
        }

        let from = self.mode;
        let to = self.advance(settings);
        Some(TimerEvent::Expired { from, to })
    }

    /// Re-derive the remaining time after a settings change.
    /// A countdown in progress (running or paused) keeps its time.
    pub fn sync_duration(&mut self, settings: &TimerSettings) {
        if self.status == TimerStatus::Stopped {
            self.time_left_secs = settings.duration_secs(self.mode);
        }
    }

    /// Zero-padded "MM:SS" for the big clock
    pub fn display(&self) -> String {
        format_clock(self.time_left_secs)
    }

    /// Fraction of the current interval already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self, settings: &TimerSettings) -> f64 {
        let total = settings.duration_secs(self.mode);
        if total == 0 {
            return 1.0;
        }
        let left = self.time_left_secs.min(total);
        (total - left) as f64 / total as f64
    }

    fn advance(&mut self, settings: &TimerSettings) -> TimerMode {
        let next = if self.mode == TimerMode::Work {
            self.sessions_completed += 1;
            if self.sessions_completed % settings.sessions_until_long_break.max(1) == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Work
        };

        self.mode = next;
        self.time_left_secs = settings.duration_secs(next);
        self.status = TimerStatus::Stopped;
        next
    }
}

/// Format seconds as "MM:SS"; minutes are not capped at 99
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
