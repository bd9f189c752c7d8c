//! Color theme for the lookup screen
//!
//! Palette colors themselves always render in truecolor from their hex value.
//! This module covers everything around them: prompt, hint, error text and
//! the table body.
//!
//! # Preset Themes
//!
//! - `dracula`: True Color theme built from the Dracula palette (default)
//! - `classic`: 16-color theme for terminals without truecolor support

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ThemeConfig;

/// Palettes dark enough to need light header text
const LIGHT_HEADER_PALETTES: [&str; 3] = ["dark", "darker", "aro"];

/// All color definitions for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub prompt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub error: Color,

    // Result table
    pub row_text: Color,
    pub row_odd_bg: Color,
    pub row_even_bg: Color,
    pub header_light: Color,
    pub header_dark: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dracula()
    }
}

impl ThemeColors {
    /// Dracula theme - True Color
    pub fn dracula() -> Self {
        Self {
            prompt: Color::Rgb(189, 147, 249),     // purple (#bd93f9)
            text: Color::Rgb(248, 248, 242),       // light (#f8f8f2)
            text_muted: Color::Rgb(98, 114, 164),  // blue (#6272a4)
            error: Color::Rgb(255, 85, 85),        // red (#ff5555)
            row_text: Color::Rgb(254, 254, 255),   // dracula 50 (#fefeff)
            row_odd_bg: Color::Rgb(40, 42, 54),    // darker (#282a36)
            row_even_bg: Color::Rgb(69, 74, 100),  // darker 700 (#454a64)
            header_light: Color::Rgb(254, 254, 255), // dracula 50 (#fefeff)
            header_dark: Color::Rgb(40, 42, 54),   // darker (#282a36)
        }
    }

    /// Classic theme - 16-color scheme
    pub fn classic() -> Self {
        Self {
            prompt: Color::Magenta,
            text: Color::White,
            text_muted: Color::DarkGray,
            error: Color::Red,
            row_text: Color::White,
            row_odd_bg: Color::Black,
            row_even_bg: Color::DarkGray,
            header_light: Color::White,
            header_dark: Color::Black,
        }
    }

    /// Create ThemeColors from a preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dracula" | "default" => Some(Self::dracula()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    /// Header text color for a palette's table
    pub fn header_text(&self, palette_name: &str) -> Color {
        if LIGHT_HEADER_PALETTES.contains(&palette_name) {
            self.header_light
        } else {
            self.header_dark
        }
    }
}

/// Color overrides for deserialization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorsConfig {
    pub prompt: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub error: Option<String>,
    pub row_text: Option<String>,
    pub row_odd_bg: Option<String>,
    pub row_even_bg: Option<String>,
    pub header_light: Option<String>,
    pub header_dark: Option<String>,
}

impl ThemeColorsConfig {
    /// Apply color overrides to a ThemeColors instance.
    /// Values that fail to parse are ignored.
    pub fn apply_to(&self, base: &mut ThemeColors) {
        override_color(&mut base.prompt, &self.prompt);
        override_color(&mut base.text, &self.text);
        override_color(&mut base.text_muted, &self.text_muted);
        override_color(&mut base.error, &self.error);
        override_color(&mut base.row_text, &self.row_text);
        override_color(&mut base.row_odd_bg, &self.row_odd_bg);
        override_color(&mut base.row_even_bg, &self.row_even_bg);
        override_color(&mut base.header_light, &self.header_light);
        override_color(&mut base.header_dark, &self.header_dark);
    }
}

fn override_color(slot: &mut Color, value: &Option<String>) {
    if let Some(color) = value.as_deref().and_then(parse_color) {
        *slot = color;
    }
}

/// Complete theme containing colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "dracula".to_string(),
            colors: ThemeColors::dracula(),
        }
    }
}

impl Theme {
    /// Create a theme from config settings, falling back to `dracula`
    /// when the preset is missing or unknown
    pub fn from_config(config: &ThemeConfig) -> Self {
        let preset_name = config.preset.as_deref().unwrap_or("dracula");
        let mut colors = ThemeColors::from_preset(preset_name).unwrap_or_else(|| {
            tracing::warn!(preset = preset_name, "unknown theme preset, using dracula");
            ThemeColors::dracula()
        });

        config.colors.apply_to(&mut colors);

        Self {
            name: preset_name.to_string(),
            colors,
        }
    }
}

/// Parse a color string into a ratatui Color
///
/// Supports:
/// - Hex colors: "#RRGGBB" or "#RGB"
/// - Named colors: "red", "green", "blue", etc.
/// - 256-color index: "0" to "255"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    if let Ok(index) = u8::from_str(s) {
        return Some(Color::Indexed(index));
    }

    parse_named_color(s)
}

/// Parse a hex color string (#RRGGBB or #RGB)
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // #RGB -> #RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_named_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}
