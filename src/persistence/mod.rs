pub mod config;

use std::path::PathBuf;

/// Get or create the clockface data directory (~/.local/share/clockface/).
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("clockface");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Get or create the clockface config directory (~/.config/clockface/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("clockface");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
