pub mod keybindings;
pub mod layout;
pub mod settings_pane;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::Panel;
use keybindings::{render_keybindings, render_status_bar};
use layout::{centered_column, create_layout};
use ratatui::{widgets::Block, Frame};
use settings_pane::render_settings_pane;
use styles::default_style;
use task_pane::render_task_pane;
use timer_pane::{render_sessions_line, render_timer_pane};

/// Widest the timer and panel column grows
const CONTENT_WIDTH: u16 = 72;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Paint the palette background first
    f.render_widget(Block::default().style(default_style(app.dark_mode)), size);

    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_timer_pane(f, app, centered_column(layout.timer_area, CONTENT_WIDTH));
    render_sessions_line(f, app, layout.sessions_area);

    let panel_area = centered_column(layout.panel_area, CONTENT_WIDTH);
    match app.panel {
        Panel::Tasks => render_task_pane(f, app, panel_area),
        Panel::Settings => render_settings_pane(f, app, panel_area),
    }

    render_status_bar(f, app, layout.status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerSettings;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_switches_panels() {
        let mut app = AppState::new(TimerSettings::default(), false, None);
        let text = draw(&app);
        assert!(text.contains("Tasks (0/0)"));
        assert!(text.contains("Light mode"));

        app.toggle_settings_panel();
        let text = draw(&app);
        assert!(text.contains("Timer Settings"));
        assert!(!text.contains("Tasks (0/0)"));
    }

    #[test]
    fn test_render_shows_rejected_input() {
        let mut app = AppState::new(TimerSettings::default(), true, None);
        app.toggle_settings_panel();
        app.settings_input_char('z');

        assert!(draw(&app).contains("'z' is not a digit"));
    }
}
