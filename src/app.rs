use crate::domain::{Panel, SettingsForm, TaskStore, Timer, TimerEvent, TimerSettings, UiMode};
use crate::notifications;
use crate::persistence::save_dark_mode;
use crate::sound::Cue;
use crate::ticker::Ticker;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Main application state
pub struct AppState {
    pub timer: Timer,
    pub settings: TimerSettings,
    pub tasks: TaskStore,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub panel: Panel,
    pub settings_form: SettingsForm,
    pub task_input: Option<String>,
    pub dark_mode: bool,
    pub use_emoji: bool,
    pub ticker: Ticker,
    /// Cues queued by transitions, drained by the run loop
    pub pending_cues: Vec<Cue>,
    /// Where the dark-mode preference is written; None keeps it in memory
    pub prefs_path: Option<PathBuf>,
    pub desktop_notifications: bool,
    /// When the last interval ran out on its own
    pub last_expired_at: Option<DateTime<Local>>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: TimerSettings, dark_mode: bool, prefs_path: Option<PathBuf>) -> Self {
        Self {
            timer: Timer::new(&settings),
            settings,
            tasks: TaskStore::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            panel: Panel::Tasks,
            settings_form: SettingsForm::new(&settings),
            task_input: None,
            dark_mode,
            use_emoji: true,
            ticker: Ticker::new(),
            pending_cues: Vec::new(),
            prefs_path,
            desktop_notifications: true,
            last_expired_at: None,
            status_message: None,
        }
    }

    // ----- timer -----

    pub fn start(&mut self, now: Instant) {
        self.transition(now, |timer, _| timer.start());
    }

    pub fn pause(&mut self, now: Instant) {
        self.transition(now, |timer, _| timer.pause());
    }

    /// Start/pause on the single play key
    pub fn toggle_run_pause(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.transition(now, |timer, settings| Some(timer.reset(settings)));
    }

    pub fn skip(&mut self, now: Instant) {
        self.transition(now, |timer, settings| Some(timer.skip(settings)));
    }

    /// Apply every countdown second that has elapsed by `now`
    pub fn tick(&mut self, now: Instant) {
        let due = self.ticker.poll(now);
        for _ in 0..due {
            if !self.timer.is_running() {
                break;
            }
            self.transition(now, |timer, settings| timer.tick(settings));
        }
    }

    /// Run one timer transition, then queue its cues and keep the ticker in
    /// step with the running state.
    fn transition<F>(&mut self, now: Instant, f: F)
    where
        F: FnOnce(&mut Timer, &TimerSettings) -> Option<TimerEvent>,
    {
        let was_running = self.timer.is_running();
        let event = f(&mut self.timer, &self.settings);

        if let Some(event) = event {
            self.on_timer_event(event);
        }

        match (was_running, self.timer.is_running()) {
            (false, true) => {
                self.ticker.arm(now);
                self.pending_cues.push(Cue::TickLoopOn);
            }
            (true, false) => {
                self.ticker.cancel();
                self.pending_cues.push(Cue::TickLoopOff);
            }
            _ => {}
        }
    }

    fn on_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Started => {
                info!(mode = ?self.timer.mode, left = self.timer.time_left_secs, "timer started");
                self.pending_cues.push(Cue::Start);
            }
            TimerEvent::Paused => {
                info!(left = self.timer.time_left_secs, "timer paused");
                self.pending_cues.push(Cue::Pause);
            }
            TimerEvent::Reset => {
                info!("timer reset");
                self.pending_cues.push(Cue::Stop);
            }
            TimerEvent::Skipped { from, to } => {
                info!(?from, ?to, sessions = self.timer.sessions_completed, "interval skipped");
                self.pending_cues.push(Cue::Skip);
            }
            TimerEvent::Expired { from, to } => {
                info!(?from, ?to, sessions = self.timer.sessions_completed, "interval finished");
                self.last_expired_at = Some(Local::now());
                // Expiry advances the same way a skip does, so it sounds both
                self.pending_cues.push(Cue::Skip);
                self.pending_cues.push(Cue::IntervalCompleted);
                if self.desktop_notifications {
                    notifications::notify_interval_complete(from, to);
                }
            }
        }
    }

    /// Take the queued cues, oldest first
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending_cues)
    }

    // ----- settings -----

    /// Swap the task list for the settings form and back
    pub fn toggle_settings_panel(&mut self) {
        match self.panel {
            Panel::Tasks => {
                self.settings_form = SettingsForm::new(&self.settings);
                self.panel = Panel::Settings;
                self.ui_mode = UiMode::EditingSettings;
                self.task_input = None;
            }
            Panel::Settings => {
                self.panel = Panel::Tasks;
                self.ui_mode = UiMode::Normal;
            }
        }
        self.status_message = None;
    }

    pub fn settings_next_field(&mut self) {
        self.settings_form.next_field();
    }

    pub fn settings_prev_field(&mut self) {
        self.settings_form.prev_field();
    }

    pub fn settings_input_char(&mut self, c: char) {
        match self.settings_form.push_char(c, &mut self.settings) {
            Ok(()) => {
                self.status_message = None;
                self.on_settings_changed();
            }
            Err(e) => {
                debug!(error = %e, "settings keystroke rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn settings_backspace(&mut self) {
        self.settings_form.backspace(&mut self.settings);
        self.on_settings_changed();
    }

    pub fn settings_step(&mut self, delta: i64) {
        self.settings_form.step(delta, &mut self.settings);
        self.on_settings_changed();
    }

    fn on_settings_changed(&mut self) {
        self.timer.sync_duration(&self.settings);
        debug!(settings = ?self.settings, "settings updated");
    }

    // ----- tasks -----

    /// Append a task; blank text is ignored
    pub fn add_task(&mut self, text: &str) -> Option<Uuid> {
        let id = self.tasks.add(text)?;
        info!(%id, "task added");
        Some(id)
    }

    /// Flip completion and cue when a task gets checked off
    pub fn toggle_task(&mut self, id: Uuid) {
        if self.tasks.toggle(id) == Some(true) {
            if let Some(task) = self.tasks.get(id) {
                info!(%id, text = %task.text, "task completed");
            }
            self.pending_cues.push(Cue::TaskCompleted);
        }
    }

    pub fn delete_task(&mut self, id: Uuid) {
        if self.tasks.delete(id).is_some() {
            info!(%id, "task deleted");
            self.clamp_selection();
        }
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.tasks.tasks().get(self.selected_index).map(|task| task.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.tasks.len().saturating_sub(1));
    }

    pub fn start_add_task(&mut self) {
        if self.panel != Panel::Tasks {
            return;
        }
        self.task_input = Some(String::new());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_input_add_char(&mut self, c: char) {
        if let Some(input) = &mut self.task_input {
            input.push(c);
        }
    }

    pub fn task_input_backspace(&mut self) {
        if let Some(input) = &mut self.task_input {
            input.pop();
        }
    }

    /// Submit the entry line. Blank input keeps the line open.
    pub fn submit_task_input(&mut self) {
        let Some(input) = self.task_input.take() else {
            return;
        };

        if self.add_task(&input).is_some() {
            // Keep the entry line open for the next task
            self.task_input = Some(String::new());
            self.selected_index = self.tasks.len() - 1;
        } else {
            self.task_input = Some(input);
        }
    }

    pub fn cancel_task_input(&mut self) {
        self.task_input = None;
        self.ui_mode = UiMode::Normal;
    }

    // ----- appearance -----

    /// Flip dark mode and persist the choice. Write failures are only logged.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        if let Some(path) = &self.prefs_path {
            if let Err(e) = save_dark_mode(path, self.dark_mode) {
                warn!(error = %e, "failed to save dark mode preference");
            }
        }
    }

    /// Stop everything that schedules work before exit
    pub fn teardown(&mut self) {
        if self.ticker.is_armed() {
            self.ticker.cancel();
            self.pending_cues.push(Cue::TickLoopOff);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{TimerMode, TimerStatus};
    use crate::persistence::prefs::load_dark_mode;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(TimerSettings::default(), false, None);
        app.desktop_notifications = false;
        app
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_initial_state() {
        let app = create_test_app();
        assert_eq!(app.timer.mode, TimerMode::Work);
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.time_left_secs, 1500);
        assert!(app.tasks.is_empty());
        assert_eq!(app.panel, Panel::Tasks);
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_start_pause_cues_and_ticker() {
        let mut app = create_test_app();
        let now = Instant::now();

        app.start(now);
        assert!(app.ticker.is_armed());
        assert_eq!(app.drain_cues(), vec![Cue::Start, Cue::TickLoopOn]);

        // Second start is ignored
        app.start(now);
        assert!(app.drain_cues().is_empty());

        app.pause(now);
        assert!(!app.ticker.is_armed());
        assert_eq!(app.drain_cues(), vec![Cue::Pause, Cue::TickLoopOff]);

        // Pausing while paused is ignored
        app.pause(now);
        assert!(app.drain_cues().is_empty());
    }

    #[test]
    fn test_tick_counts_down_once_per_second() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.start(start);

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.timer.time_left_secs, 1500);

        app.tick(start + secs(1));
        assert_eq!(app.timer.time_left_secs, 1499);

        app.tick(start + secs(3));
        assert_eq!(app.timer.time_left_secs, 1497);
    }

    #[test]
    fn test_paused_timer_does_not_tick() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.start(start);
        app.tick(start + secs(2));
        app.pause(start + secs(2));

        app.tick(start + secs(60));
        assert_eq!(app.timer.time_left_secs, 1498);
    }

    #[test]
    fn test_resume_restarts_full_period() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.start(start);
        app.pause(start + Duration::from_millis(900));
        app.start(start + secs(5));

        app.tick(start + Duration::from_millis(5500));
        assert_eq!(app.timer.time_left_secs, 1500);
        app.tick(start + secs(6));
        assert_eq!(app.timer.time_left_secs, 1499);
    }

    #[test]
    fn test_natural_expiry() {
        let settings = TimerSettings {
            work_minutes: 1,
            ..TimerSettings::default()
        };
        let mut app = AppState::new(settings, false, None);
        app.desktop_notifications = false;
        let start = Instant::now();
        app.start(start);
        app.drain_cues();

        // A long stall never drives the countdown past zero
        app.tick(start + secs(600));

        assert_eq!(app.timer.mode, TimerMode::ShortBreak);
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.time_left_secs, 300);
        assert_eq!(app.timer.sessions_completed, 1);
        assert!(!app.ticker.is_armed());
        assert!(app.last_expired_at.is_some());
        assert_eq!(
            app.drain_cues(),
            vec![Cue::Skip, Cue::IntervalCompleted, Cue::TickLoopOff]
        );
    }

    #[test]
    fn test_skip_scenario() {
        let mut app = create_test_app();
        let now = Instant::now();
        let mut after_work = Vec::new();

        for _ in 0..4 {
            app.skip(now);
            after_work.push(app.timer.mode);
            app.skip(now);
        }

        assert_eq!(
            after_work,
            vec![
                TimerMode::ShortBreak,
                TimerMode::ShortBreak,
                TimerMode::ShortBreak,
                TimerMode::LongBreak,
            ]
        );
        assert_eq!(app.drain_cues(), vec![Cue::Skip; 8]);
    }

    #[test]
    fn test_skip_while_running_stops_ticker() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start(now);
        app.drain_cues();

        app.skip(now);
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert!(!app.ticker.is_armed());
        assert_eq!(app.drain_cues(), vec![Cue::Skip, Cue::TickLoopOff]);
    }

    #[test]
    fn test_reset() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.skip(now);
        app.skip(now);
        app.skip(now);
        app.start(now);
        app.drain_cues();

        app.reset(now);
        assert_eq!(app.timer.mode, TimerMode::Work);
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.sessions_completed, 0);
        assert_eq!(app.timer.time_left_secs, 1500);
        assert!(!app.ticker.is_armed());
        assert_eq!(app.drain_cues(), vec![Cue::Stop, Cue::TickLoopOff]);
    }

    #[test]
    fn test_settings_change_resyncs_stopped_timer() {
        let mut app = create_test_app();
        app.toggle_settings_panel();
        assert_eq!(app.ui_mode, UiMode::EditingSettings);

        app.settings_backspace();
        app.settings_backspace();
        app.settings_input_char('5');
        app.settings_input_char('0');

        assert_eq!(app.settings.work_minutes, 50);
        assert_eq!(app.timer.time_left_secs, 3000);
    }

    #[test]
    fn test_settings_change_leaves_countdown_alone() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.start(start);
        app.tick(start + secs(1));

        app.toggle_settings_panel();
        app.settings_step(5);
        assert_eq!(app.settings.work_minutes, 30);
        assert_eq!(app.timer.time_left_secs, 1499);
    }

    #[test]
    fn test_settings_rejects_non_digit() {
        let mut app = create_test_app();
        app.toggle_settings_panel();
        app.settings_input_char('a');

        assert_eq!(app.settings, TimerSettings::default());
        assert!(app.status_message.is_some());

        app.settings_input_char('1');
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_settings_change_applies_on_next_interval() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.toggle_settings_panel();
        app.settings_next_field();
        app.settings_step(5);
        app.toggle_settings_panel();
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.skip(now);
        assert_eq!(app.timer.mode, TimerMode::ShortBreak);
        assert_eq!(app.timer.time_left_secs, 600);
    }

    #[test]
    fn test_add_and_toggle_tasks() {
        let mut app = create_test_app();

        assert_eq!(app.add_task("  "), None);
        assert!(app.tasks.is_empty());

        let id = app.add_task("Buy milk").unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert!(!app.tasks.get(id).unwrap().completed);

        app.toggle_task(id);
        assert!(app.tasks.get(id).unwrap().completed);
        assert_eq!(app.drain_cues(), vec![Cue::TaskCompleted]);

        // Unchecking is silent
        app.toggle_task(id);
        assert!(app.drain_cues().is_empty());

        // Unknown id: no change, no cue
        app.toggle_task(Uuid::new_v4());
        assert_eq!(app.tasks.len(), 1);
        assert!(app.drain_cues().is_empty());
    }

    #[test]
    fn test_task_input_flow() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        app.task_input_add_char(' ');
        app.submit_task_input();
        assert!(app.tasks.is_empty());
        assert_eq!(app.task_input.as_deref(), Some(" "));

        app.task_input_backspace();
        for c in "Read".chars() {
            app.task_input_add_char(c);
        }
        app.submit_task_input();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "Read");
        assert_eq!(app.task_input.as_deref(), Some(""));

        app.cancel_task_input();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.task_input.is_none());
    }

    #[test]
    fn test_selection_and_delete() {
        let mut app = create_test_app();
        app.add_task("a");
        app.add_task("b");
        app.add_task("c");

        app.move_selection_down();
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 2);

        app.delete_selected();
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        app.toggle_selected();
        assert!(app.tasks.tasks()[0].completed);

        app.delete_selected();
        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected_index, 0);

        // Nothing selected: no-op
        app.delete_selected();
        app.toggle_selected();
    }

    #[test]
    fn test_toggle_dark_mode_persists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("prefs.json");
        let mut app = AppState::new(TimerSettings::default(), false, Some(path.clone()));

        app.toggle_dark_mode();
        assert!(app.dark_mode);
        assert_eq!(load_dark_mode(&path).unwrap(), Some(true));

        app.toggle_dark_mode();
        assert_eq!(load_dark_mode(&path).unwrap(), Some(false));
    }

    #[test]
    fn test_dark_mode_write_failure_is_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing-dir").join("prefs.json");
        let mut app = AppState::new(TimerSettings::default(), false, Some(path));

        app.toggle_dark_mode();
        assert!(app.dark_mode);
    }

    #[test]
    fn test_teardown_cancels_ticker() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start(now);
        app.drain_cues();

        app.teardown();
        assert!(!app.ticker.is_armed());
        assert_eq!(app.drain_cues(), vec![Cue::TickLoopOff]);

        // Nothing left to stop the second time
        app.teardown();
        assert!(app.drain_cues().is_empty());
    }

    #[test]
    fn test_toggle_run_pause() {
        let mut app = create_test_app();
        let now = Instant::now();

        app.toggle_run_pause(now);
        assert_eq!(app.timer.status, TimerStatus::Running);
        app.toggle_run_pause(now);
        assert_eq!(app.timer.status, TimerStatus::Paused);
        assert_eq!(
            app.drain_cues(),
            vec![Cue::Start, Cue::TickLoopOn, Cue::Pause, Cue::TickLoopOff]
        );
    }
}
