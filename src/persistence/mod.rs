pub mod files;
pub mod prefs;

pub use files::{ensure_pomo_dir, init_local_pomo, log_file, prefs_file};
pub use prefs::{clear_dark_mode, resolve_dark_mode, save_dark_mode};
