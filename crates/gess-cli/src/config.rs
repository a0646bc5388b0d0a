//! Configuration file loading for the `gess` front end.
//!
//! Settings live in a TOML file, `gess.toml` in the working directory unless
//! another path is given on the command line. Every field is optional.

use gess_core::DiagramError;
use gess_engine::Position;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start diagram is not a valid board.
    #[error("Invalid start diagram: {0}")]
    StartDiagram(#[from] DiagramError),
}

/// Characters used when printing a board.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Glyph for a Black stone. Defaults to `b`.
    #[serde(default = "default_black")]
    pub black: char,
    /// Glyph for a White stone. Defaults to `w`.
    #[serde(default = "default_white")]
    pub white: char,
    /// Glyph for an empty cell. Defaults to `.`.
    #[serde(default = "default_empty")]
    pub empty: char,
}

fn default_black() -> char {
    'b'
}

fn default_white() -> char {
    'w'
}

fn default_empty() -> char {
    '.'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            black: default_black(),
            white: default_white(),
            empty: default_empty(),
        }
    }
}

/// Front-end configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Board glyphs.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Print the board after every accepted move.
    #[serde(default)]
    pub show_board_after_move: bool,
    /// Diagram to start new games from instead of the standard layout.
    #[serde(default)]
    pub start: Option<String>,
}

impl CliConfig {
    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `gess.toml`.
    pub fn default_path() -> PathBuf {
        PathBuf::from("gess.toml")
    }

    /// Returns the position new games start from.
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        match &self.start {
            Some(diagram) => Ok(Position::from_diagram(diagram)?),
            None => Ok(Position::startpos()),
        }
    }
}
