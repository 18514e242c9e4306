use crate::app::AppState;
use crate::domain::{Panel, UiMode};
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" type task   "),
            Span::raw("Enter add   "),
            Span::raw("Esc done"),
        ]),
        _ => {
            let mut spans = vec![
                Span::raw(" Space start/pause   "),
                Span::raw("r reset   "),
                Span::raw("s skip   "),
            ];
            if app.panel == Panel::Tasks {
                spans.push(Span::raw("a add   "));
                spans.push(Span::raw("x toggle   "));
                spans.push(Span::raw("d delete   "));
            }
            spans.push(Span::raw("o settings   "));
            spans.push(Span::raw("t theme   "));
            spans.push(Span::raw("q quit"));
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(hints).style(hint_style(app.dark_mode));
    f.render_widget(paragraph, area);
}

/// Render the bottom status bar: feedback message, else the last finished interval
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(format!(" {}", message), error_style()))
    } else if let Some(at) = app.last_expired_at {
        Line::from(Span::styled(
            format!(" Last interval finished at {}", at.format("%H:%M")),
            hint_style(app.dark_mode),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} mode", if app.dark_mode { "Dark" } else { "Light" }),
            hint_style(app.dark_mode),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
