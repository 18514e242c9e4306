use super::enums::TimerMode;
use thiserror::Error;

/// Lower bound for every settings field
pub const MIN_FIELD_VALUE: u32 = 1;

/// Durations (in minutes) and the long-break cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub sessions_until_long_break: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_until_long_break: 4,
        }
    }
}

impl TimerSettings {
    /// Configured length of an interval in seconds
    pub fn duration_secs(&self, mode: TimerMode) -> u64 {
        let minutes = match mode {
            TimerMode::Work => self.work_minutes,
            TimerMode::ShortBreak => self.short_break_minutes,
            TimerMode::LongBreak => self.long_break_minutes,
        };
        u64::from(minutes) * 60
    }

    pub fn get(&self, field: SettingsField) -> u32 {
        match field {
            SettingsField::Work => self.work_minutes,
            SettingsField::ShortBreak => self.short_break_minutes,
            SettingsField::LongBreak => self.long_break_minutes,
            SettingsField::SessionsUntilLongBreak => self.sessions_until_long_break,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: SettingsField, value: u32) {
        match field {
            SettingsField::Work => self.work_minutes = value,
            SettingsField::ShortBreak => self.short_break_minutes = value,
            SettingsField::LongBreak => self.long_break_minutes = value,
            SettingsField::SessionsUntilLongBreak => self.sessions_until_long_break = value,
        }
    }
}

/// One editable row of the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Work,
    ShortBreak,
    LongBreak,
    SessionsUntilLongBreak,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::Work,
            SettingsField::ShortBreak,
            SettingsField::LongBreak,
            SettingsField::SessionsUntilLongBreak,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work Duration (minutes)",
            Self::ShortBreak => "Short Break Duration (minutes)",
            Self::LongBreak => "Long Break Duration (minutes)",
            Self::SessionsUntilLongBreak => "Sessions until Long Break",
        }
    }

    /// Upper bound enforced by the input widget only
    pub fn max(&self) -> u32 {
        match self {
            Self::Work => 60,
            Self::ShortBreak => 30,
            Self::LongBreak => 60,
            Self::SessionsUntilLongBreak => 10,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Work => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
            Self::SessionsUntilLongBreak => 3,
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    fn clamp(&self, value: u64) -> u32 {
        // max() fits in u32, so the cast after clamping is lossless
        value.clamp(u64::from(MIN_FIELD_VALUE), u64::from(self.max())) as u32
    }
}

/// Rejected keystroke in the settings form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsInputError {
    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

/// Text buffers backing the settings form.
///
/// Every accepted keystroke is parsed, clamped to `[1, field max]` and written
/// straight into the settings. An empty buffer commits the minimum.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub field: SettingsField,
    buffers: [String; 4],
}

impl SettingsForm {
    pub fn new(settings: &TimerSettings) -> Self {
        let buffers = [
            settings.work_minutes.to_string(),
            settings.short_break_minutes.to_string(),
            settings.long_break_minutes.to_string(),
            settings.sessions_until_long_break.to_string(),
        ];
        Self {
            field: SettingsField::Work,
            buffers,
        }
    }

    /// Current text of a field
    pub fn buffer(&self, field: SettingsField) -> &str {
        &self.buffers[field.index()]
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Append a digit to the focused field
    pub fn push_char(
        &mut self,
        c: char,
        settings: &mut TimerSettings,
    ) -> Result<(), SettingsInputError> {
        if !c.is_ascii_digit() {
            return Err(SettingsInputError::NotADigit(c));
        }
        self.buffers[self.field.index()].push(c);
        self.commit(settings);
        Ok(())
    }

    pub fn backspace(&mut self, settings: &mut TimerSettings) {
        self.buffers[self.field.index()].pop();
        self.commit(settings);
    }

    /// Nudge the focused field by `delta`, staying within bounds
    pub fn step(&mut self, delta: i64, settings: &mut TimerSettings) {
        let current = i64::from(settings.get(self.field));
        let target = (current + delta).max(0) as u64;
        let value = self.field.clamp(target);
        settings.set(self.field, value);
        self.buffers[self.field.index()] = value.to_string();
    }

    fn commit(&mut self, settings: &mut TimerSettings) {
        let field = self.field;
        let buffer = &mut self.buffers[field.index()];

        if buffer.is_empty() {
            settings.set(field, MIN_FIELD_VALUE);
            return;
        }

        // Digits only, so the sole parse failure is overflow
        let parsed = buffer.parse::<u64>().unwrap_or(u64::MAX);
        let value = field.clamp(parsed);
        if u64::from(value) != parsed {
            *buffer = value.to_string();
        }
        settings.set(field, value);
    }
}
