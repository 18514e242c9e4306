use crate::app::AppState;
use crate::domain::{checkbox, UiMode};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, input_style, selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task checklist, with the entry line on top while adding
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let title = format!(
        " Tasks ({}/{}) ",
        app.tasks.completed_count(),
        app.tasks.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(dark))
        .title(Span::styled(title, title_style(dark)))
        .style(default_style(dark));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Entry line + spacer
            Constraint::Min(0),    // Task list
        ])
        .split(inner);

    render_entry_line(f, app, chunks[0]);

    if app.tasks.is_empty() {
        let empty = Paragraph::new("No tasks yet").style(hint_style(dark));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|task| {
            let text_style = if task.completed {
                done_style(dark)
            } else {
                default_style(dark)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", checkbox(task.completed))),
                Span::styled(task.text.as_str(), text_style),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(selected_style(dark));

    let mut state = ListState::default();
    if app.ui_mode != UiMode::AddingTask {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_entry_line(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let line = match &app.task_input {
        Some(input) => Line::from(vec![
            Span::raw("> "),
            Span::styled(input.as_str(), input_style(dark)),
            Span::styled("█", input_style(dark)), // Cursor
        ]),
        None => Line::from(Span::styled("Add a task... (a)", hint_style(dark))),
    };
    f.render_widget(Paragraph::new(line), area);
}
