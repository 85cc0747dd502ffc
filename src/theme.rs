//! Display colors resolved from config hex strings.

use ratatui::style::{Color, Style};

use crate::config::ThemeConfig;

/// Parse a "#rrggbb" hex string into a ratatui color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() != 7 {
        return None;
    }

    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Resolved display colors for the rain surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
}

impl Theme {
    /// Resolve the configured hex strings, falling back to the stock
    /// green-on-black for anything unparseable.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            foreground: parse_hex_color(&config.foreground).unwrap_or(Color::Green),
            background: parse_hex_color(&config.background).unwrap_or(Color::Black),
        }
    }

    /// Style applied to every cell of the surface.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
