use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the data directory, both local and under $HOME
pub const POMO_DIR_NAME: &str = ".pomo";

/// Get the pomo directory - checks for local .pomo first, then falls back to global ~/.pomo
pub fn get_pomo_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_pomo(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(POMO_DIR_NAME))
}

/// Find local .pomo directory by walking up the directory tree
fn find_local_pomo(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let pomo_dir = current.join(POMO_DIR_NAME);
        if pomo_dir.is_dir() {
            return Some(pomo_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the pomo directory exists
pub fn ensure_pomo_dir() -> Result<PathBuf> {
    let dir = get_pomo_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .pomo directory in the current directory
pub fn init_local_pomo() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    init_pomo_in(&current_dir)
}

fn init_pomo_in(parent: &Path) -> Result<PathBuf> {
    let pomo_dir = parent.join(POMO_DIR_NAME);

    if pomo_dir.exists() {
        anyhow::bail!("Pomo directory already exists: {}", pomo_dir.display());
    }

    fs::create_dir_all(&pomo_dir)
        .with_context(|| format!("Failed to create directory: {}", pomo_dir.display()))?;

    Ok(pomo_dir)
}

/// Get path to prefs.json (stores the dark-mode preference)
pub fn prefs_file() -> Result<PathBuf> {
    Ok(ensure_pomo_dir()?.join("prefs.json"))
}

/// Get path to the log file
pub fn log_file() -> Result<PathBuf> {
    Ok(ensure_pomo_dir()?.join("pomo.log"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
