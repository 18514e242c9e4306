use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask => handle_task_input_mode(app, key),
        UiMode::EditingSettings => handle_settings_mode(app, key, now),
    }
}

/// Timer controls shared by normal and settings mode
fn handle_timer_key(app: &mut AppState, code: KeyCode, now: Instant) -> bool {
    match code {
        KeyCode::Char(' ') => app.toggle_run_pause(now),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(now),
        KeyCode::Char('s') | KeyCode::Char('S') => app.skip(now),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),
        _ => return false,
    }
    true
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if handle_timer_key(app, key.code, now) {
        return false;
    }

    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Toggle completion of the selected task
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected(),

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        KeyCode::Char('o') | KeyCode::Char('O') => app.toggle_settings_panel(),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing a new task
fn handle_task_input_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_task_input(),
        KeyCode::Esc => app.cancel_task_input(),
        KeyCode::Backspace => app.task_input_backspace(),
        KeyCode::Char(c) => app.task_input_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while the settings form is open
fn handle_settings_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if handle_timer_key(app, key.code, now) {
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.settings_prev_field(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => app.settings_next_field(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.settings_step(1),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => app.settings_step(-1),
        KeyCode::Backspace => app.settings_backspace(),
        KeyCode::Char('o') | KeyCode::Char('O') | KeyCode::Esc => app.toggle_settings_panel(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(c) => app.settings_input_char(c),
        _ => {}
    }
    false
}
