use super::files::{atomic_write, read_file};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Preferences stored in prefs.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefs {
    /// None when never set, so the system signal applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    // Keys written by other versions are carried through untouched
    #[serde(flatten)]
    other: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preferences at {path} are malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load prefs.json, defaults when the file doesn't exist
pub fn load_prefs<P: AsRef<Path>>(path: P) -> Result<Prefs, PrefsError> {
    let path = path.as_ref();
    let content = read_file(path).map_err(|source| PrefsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match content {
        None => Ok(Prefs::default()),
        Some(content) => serde_json::from_str(&content).map_err(|source| PrefsError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Save prefs.json atomically
pub fn save_prefs<P: AsRef<Path>>(path: P, prefs: &Prefs) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(prefs)?;
    atomic_write(path, &json)
}

/// Stored dark-mode preference, None when never set
pub fn load_dark_mode<P: AsRef<Path>>(path: P) -> Result<Option<bool>, PrefsError> {
    Ok(load_prefs(path)?.dark_mode)
}

/// Persist the dark-mode preference
pub fn save_dark_mode<P: AsRef<Path>>(path: P, dark: bool) -> anyhow::Result<()> {
    let path = path.as_ref();
    // An unreadable file is overwritten rather than blocking the write
    let mut prefs = load_prefs(path).unwrap_or_default();
    prefs.dark_mode = Some(dark);
    save_prefs(path, &prefs)
}

/// Forget the stored preference so the system signal applies again
pub fn clear_dark_mode<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut prefs = load_prefs(path).unwrap_or_default();
    prefs.dark_mode = None;
    save_prefs(path, &prefs)
}

/// Terminal light/dark hint from `COLORFGBG` ("fg;bg" or "fg;default;bg").
/// Background colour indices 0-6 and 8 are dark.
pub fn parse_colorfgbg(value: Option<&str>) -> bool {
    let Some(bg) = value.and_then(|v| v.rsplit(';').next()) else {
        return false;
    };
    matches!(bg.trim().parse::<u8>(), Ok(0..=6) | Ok(8))
}

/// System-level dark preference for the running terminal
pub fn system_prefers_dark() -> bool {
    parse_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

/// Stored preference if present, otherwise the system signal
pub fn resolve_dark_mode<P: AsRef<Path>>(path: P) -> bool {
    match load_dark_mode(path) {
        Ok(Some(dark)) => dark,
        Ok(None) => system_prefers_dark(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable preferences");
            system_prefers_dark()
        }
    }
}
