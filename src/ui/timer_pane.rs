use crate::app::AppState;
use crate::domain::{mode_glyph, session_counter, status_badge};
use crate::ui::styles::{clock_style, default_style, gauge_style, mode_border_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the countdown: mode, MM:SS clock, status and progress
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let mode = app.timer.mode;

    let title = format!(" {} {} ", mode_glyph(mode, app.use_emoji), mode.label());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(mode_border_style(mode, dark))
        .title(Span::styled(title, title_style(dark)))
        .style(default_style(dark));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Clock + status
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(app.timer.display(), clock_style(mode, dark))),
        Line::raw(""),
        Line::raw(status_badge(app.timer.status)),
    ];
    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(clock, chunks[0]);

    let ratio = app.timer.progress_ratio(&app.settings).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(mode, dark))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, chunks[1]);
}

/// Render "Sessions completed: X / N" centred under the timer
pub fn render_sessions_line(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(session_counter(&app.timer, &app.settings))
        .alignment(Alignment::Center)
        .style(default_style(app.dark_mode));
    f.render_widget(paragraph, area);
}
