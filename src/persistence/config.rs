use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::face::angles::HourHand;
use crate::face::geometry::DEFAULT_MARGIN;
use crate::face::schedule::Cadence;
use crate::face::style::ColorOverrides;

/// Logical width the terminal host lays the dial out at.
pub const DEFAULT_DIAL_WIDTH: f64 = 1080.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Distance between the ring and the view edge.
    pub margin: f64,
    /// Width handed to the layout pass by the terminal host.
    pub dial_width: f64,
    /// "every-second" or "every-frame".
    pub cadence: Cadence,
    /// "stepped" or "sweep".
    pub hour_hand: HourHand,
    /// Per-element colour overrides.
    pub colors: ColorOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            dial_width: DEFAULT_DIAL_WIDTH,
            cadence: Cadence::default(),
            hour_hand: HourHand::default(),
            colors: ColorOverrides::default(),
        }
    }
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(super::config_dir()?.join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from disk, returning defaults if file doesn't exist or is invalid.
pub fn load_config() -> Config {
    let path = match config_path() {
        Some(p) => p,
        None => return Config::default(),
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }),
        Err(_) => {
            // Create default config file on first run
            let config = Config::default();
            if let Err(e) = write_default_config(&path, &config) {
                log::warn!("{}", e);
            }
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &Path, config: &Config) -> Result<(), String> {
    let content = format!(
        "# clockface configuration\n\
         \n\
         # Distance between the ring and the edge of the view\n\
         margin = {:.1}\n\
         \n\
         # Width the dial is laid out at before scaling to the terminal\n\
         dial_width = {:.1}\n\
         \n\
         # Redraw cadence: \"every-second\" or \"every-frame\"\n\
         cadence = \"every-second\"\n\
         \n\
         # Hour hand motion: \"stepped\" or \"sweep\"\n\
         hour_hand = \"stepped\"\n\
         \n\
         [colors]\n\
         # Any of: ring_color, big_scale_color, small_scale_color,\n\
         # hour_color, minute_color, second_color, text_color\n\
         # second_color = \"#f38ba8\"\n",
        config.margin,
        config.dial_width,
    );
    std::fs::write(path, content.as_bytes())
        .map_err(|e| format!("write error: {}: {}", path.display(), e))
}
