use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub sessions_area: Rect,
    pub panel_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane (clock, status, progress)
/// - Session counter (1 row)
/// - Task list or settings form
/// - Status bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(8), // Timer pane
            Constraint::Length(1), // Session counter
            Constraint::Min(0),    // Tasks / settings
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        timer_area: chunks[1],
        sessions_area: chunks[2],
        panel_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Center a column of at most `max_width` inside `area`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.timer_area.height, 8);
        assert_eq!(layout.sessions_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.panel_area.height, 29);
        assert_eq!(layout.status_area.y, 39);
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 10);
        let column = centered_column(area, 60);
        assert_eq!(column, Rect::new(20, 0, 60, 10));

        let narrow = Rect::new(5, 0, 40, 10);
        assert_eq!(centered_column(narrow, 60), narrow);
    }
}
