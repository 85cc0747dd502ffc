//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the single TOML blob we ship, exposes the data-directory
//! resolution (`MATRIX_SCREEN_DIR` override, `~/.matrix-screen` default),
//! and seeds a fresh directory with the embedded defaults on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed the default configuration file at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Milliseconds between appended lines
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
    /// Requested characters per line; replaced by the measured terminal
    /// fit at startup
    #[serde(default = "default_line_length")]
    pub line_length: usize,
    /// Requested surface width; replaced by the detected terminal width
    #[serde(default = "default_width")]
    pub width: u16,
    /// Requested surface height; replaced by the detected terminal height
    #[serde(default = "default_height")]
    pub height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Cells of padding left and right of the text surface
    #[serde(default = "default_padding_x")]
    pub padding_x: u16,
    /// Cells of padding above and below the text surface
    #[serde(default = "default_padding_y")]
    pub padding_y: u16,
    /// Input poll cadence in milliseconds (lower = snappier keys, higher CPU)
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    /// Lines kept in the scrollback buffer; unset keeps every line
    #[serde(default)]
    pub scrollback_lines: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_update_interval_ms() -> u64 {
    100
}

fn default_line_length() -> usize {
    189
}

fn default_width() -> u16 {
    1920
}

fn default_height() -> u16 {
    1080
}

fn default_padding_x() -> u16 {
    10
}

fn default_padding_y() -> u16 {
    10
}

fn default_poll_timeout_ms() -> u64 {
    16
}

fn default_foreground() -> String {
    "#00ff00".to_string()
}

fn default_background() -> String {
    "#000000".to_string()
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            line_length: default_line_length(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            padding_x: default_padding_x(),
            padding_y: default_padding_y(),
            poll_timeout_ms: default_poll_timeout_ms(),
            scrollback_lines: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

impl Config {
    /// Get the base matrix-screen directory (~/.matrix-screen/)
    /// Can be overridden with the MATRIX_SCREEN_DIR environment variable
    fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("MATRIX_SCREEN_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".matrix-screen"))
    }

    /// Get path to config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config.toml from the data directory, seeding it with the
    /// embedded defaults on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::write_default(&path)?;
        }
        Self::load_from_path(&path)
    }

    /// Load a specific config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("embedded config must parse");
        assert_eq!(config.animation.update_interval_ms, 100);
        assert_eq!(config.animation.line_length, 189);
        assert_eq!(config.animation.width, 1920);
        assert_eq!(config.animation.height, 1080);
        assert_eq!(config.ui.padding_x, 10);
        assert_eq!(config.ui.padding_y, 10);
        assert_eq!(config.ui.scrollback_lines, None);
        assert_eq!(config.theme.foreground, "#00ff00");
        assert_eq!(config.theme.background, "#000000");
    }

    #[test]
    fn test_empty_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.animation.update_interval_ms, 100);
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.theme.foreground, "#00ff00");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [animation]
            update_interval_ms = 50

            [ui]
            scrollback_lines = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.update_interval_ms, 50);
        assert_eq!(config.animation.line_length, 189);
        assert_eq!(config.ui.scrollback_lines, Some(2000));
        assert_eq!(config.ui.padding_x, 10);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let raw = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(
            reparsed.animation.update_interval_ms,
            config.animation.update_interval_ms
        );
        assert_eq!(reparsed.ui.padding_y, config.ui.padding_y);
        assert_eq!(reparsed.theme.background, config.theme.background);
    }
}
