use super::enums::{TimerMode, TimerStatus};
use super::settings::TimerSettings;
use super::timer::Timer;

/// Session counter line, e.g. "Sessions completed: 2 / 4"
pub fn session_counter(timer: &Timer, settings: &TimerSettings) -> String {
    format!(
        "Sessions completed: {} / {}",
        timer.sessions_completed, settings.sessions_until_long_break
    )
}

/// Glyph for the active interval
pub fn mode_glyph(mode: TimerMode, use_emoji: bool) -> &'static str {
    if use_emoji {
        match mode {
            TimerMode::Work => "🍅",
            TimerMode::ShortBreak => "☕",
            TimerMode::LongBreak => "🌴",
        }
    } else {
        // ASCII fallback
        match mode {
            TimerMode::Work => "W",
            TimerMode::ShortBreak => "b",
            TimerMode::LongBreak => "B",
        }
    }
}

/// Get status badge text
pub fn status_badge(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Running => "⏱ RUNNING",
        TimerStatus::Paused => "⏸ PAUSED",
        TimerStatus::Stopped => "■ STOPPED",
    }
}

/// Checkbox shown in front of each task
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
