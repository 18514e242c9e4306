use crate::app::AppState;
use crate::domain::SettingsField;
use crate::ui::styles::{border_style, default_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the timer settings form in place of the task list
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let form = &app.settings_form;
    let mut lines = Vec::new();

    for &field in SettingsField::all() {
        let focused = form.field == field;
        let label = if focused {
            format!("{} (editing)", field.label())
        } else {
            field.label().to_string()
        };
        lines.push(Line::raw(label));

        let value_style = if focused {
            input_style(dark)
        } else {
            default_style(dark)
        };
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.buffer(field), value_style),
            if focused {
                Span::styled("█", input_style(dark)) // Cursor
            } else {
                Span::raw("")
            },
            Span::styled(format!("   (1-{})", field.max()), hint_style(dark)),
        ]));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "↑/↓ field  ·  +/- adjust  ·  digits to type  ·  o/Esc close",
        hint_style(dark),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(dark))
                .title(Span::styled(" Timer Settings ", title_style(dark))),
        )
        .style(default_style(dark))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
