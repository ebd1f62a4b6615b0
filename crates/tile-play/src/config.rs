use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tile_engine::session::SessionConfig;

/// Player configuration, loaded from TOML.
///
/// ```toml
/// [game]
/// size = 4
/// initial_tiles = 3
/// spawn_per_move = 2
/// seed = 1234
///
/// [output]
/// json = true
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: SessionConfig,

    #[serde(default)]
    pub output: Output,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Output {
    /// Print the final summary as JSON instead of plain text.
    #[serde(default)]
    pub json: bool,
    /// Print the help line above the board on every redraw.
    #[serde(default = "defaults::show_help")]
    pub show_help: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            json: false,
            show_help: defaults::show_help(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn show_help() -> bool { true }
}
