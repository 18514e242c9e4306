pub mod enums;
pub mod settings;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{Panel, TimerMode, UiMode};
pub use settings::{SettingsField, SettingsForm, TimerSettings};
pub use task::TaskStore;
pub use timer::{Timer, TimerEvent};
pub use views::{checkbox, mode_glyph, session_counter, status_badge};
