use crate::domain::TimerMode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(dark: bool) -> Style {
    if dark {
        Style::default().fg(Color::Gray).bg(Color::Black)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    }
}

/// Selected row highlight style
pub fn selected_style(dark: bool) -> Style {
    let bg = if dark { Color::DarkGray } else { Color::LightCyan };
    Style::default()
        .fg(if dark { Color::White } else { Color::Black })
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Accent colour of the active interval
pub fn mode_color(mode: TimerMode, dark: bool) -> Color {
    match (mode, dark) {
        (TimerMode::Work, false) => Color::LightRed,
        (TimerMode::Work, true) => Color::Red,
        (TimerMode::ShortBreak, false) => Color::LightGreen,
        (TimerMode::ShortBreak, true) => Color::Green,
        (TimerMode::LongBreak, false) => Color::LightBlue,
        (TimerMode::LongBreak, true) => Color::Blue,
    }
}

/// Big clock digits
pub fn clock_style(mode: TimerMode, dark: bool) -> Style {
    Style::default()
        .fg(mode_color(mode, dark))
        .add_modifier(Modifier::BOLD)
}

/// Border of the timer pane, tinted by mode
pub fn mode_border_style(mode: TimerMode, dark: bool) -> Style {
    Style::default().fg(mode_color(mode, dark))
}

/// Title style for panes
pub fn title_style(dark: bool) -> Style {
    Style::default()
        .fg(if dark { Color::LightCyan } else { Color::Blue })
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(dark: bool) -> Style {
    Style::default().fg(if dark { Color::DarkGray } else { Color::Gray })
}

/// Completed task text
pub fn done_style(dark: bool) -> Style {
    Style::default()
        .fg(if dark { Color::DarkGray } else { Color::Gray })
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Keybinding hint style
pub fn hint_style(dark: bool) -> Style {
    Style::default().fg(if dark { Color::DarkGray } else { Color::Gray })
}

/// Focused form field
pub fn input_style(dark: bool) -> Style {
    Style::default()
        .fg(if dark { Color::Yellow } else { Color::Magenta })
        .add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Progress gauge for the current interval
pub fn gauge_style(mode: TimerMode, dark: bool) -> Style {
    Style::default()
        .fg(mode_color(mode, dark))
        .bg(if dark { Color::DarkGray } else { Color::Gray })
}
