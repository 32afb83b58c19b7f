//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal view, supporting
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `dark`: light text on a dark terminal (default)
//! - `light`: dark text on a light terminal
//! - `plain`: no escape sequences at all, for pipes and tests
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! favourite_fg = "#f38ba8"
//! feedback_fg = "#1e1e2e"
//! feedback_bg = "#a6e3a1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use favoris::ui::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! assert!(!theme.plain);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{FavorisError, Result};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,

    /// Emit no escape sequences; colors are ignored.
    #[serde(default)]
    pub plain: bool,

    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Favourite marker color.
    pub favourite_fg: String,

    /// Feedback bubble colors.
    pub feedback_fg: String,
    pub feedback_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name: `dark`, `light` or `plain`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FavorisError::Io`] if the file cannot be read and
    /// [`FavorisError::Config`] if the TOML does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| FavorisError::Config(format!("failed to parse theme TOML: {e}")))
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            plain: false,
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: None,
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                search_bar_border: "#f5c2e7".to_string(),
                match_highlight_fg: "#1e1e2e".to_string(),
                match_highlight_bg: "#f9e2af".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
                favourite_fg: "#f38ba8".to_string(),
                feedback_fg: "#1e1e2e".to_string(),
                feedback_bg: "#a6e3a1".to_string(),
            },
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            plain: false,
            colors: ThemeColors {
                header_fg: "#4c4f69".to_string(),
                header_bg: Some("#e6e9ef".to_string()),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#9ca0b0".to_string(),
                border: "#bcc0cc".to_string(),
                search_bar_border: "#ea76cb".to_string(),
                match_highlight_fg: "#eff1f5".to_string(),
                match_highlight_bg: "#df8e1d".to_string(),
                empty_state_fg: "#1e66f5".to_string(),
                favourite_fg: "#d20f39".to_string(),
                feedback_fg: "#eff1f5".to_string(),
                feedback_bg: "#40a02b".to_string(),
            },
        }
    }

    /// Theme without any escape sequence.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            plain: true,
            ..Self::dark()
        }
    }

    /// Foreground sequence for `hex`, empty for plain themes.
    #[must_use]
    pub fn fg_code(&self, hex: &str) -> String {
        if self.plain {
            String::new()
        } else {
            Self::fg(hex)
        }
    }

    /// Background sequence for `hex`, empty for plain themes.
    #[must_use]
    pub fn bg_code(&self, hex: &str) -> String {
        if self.plain {
            String::new()
        } else {
            Self::bg(hex)
        }
    }

    #[must_use]
    pub const fn bold_code(&self) -> &'static str {
        if self.plain {
            ""
        } else {
            Self::bold()
        }
    }

    #[must_use]
    pub const fn dim_code(&self) -> &'static str {
        if self.plain {
            ""
        } else {
            Self::dim()
        }
    }

    #[must_use]
    pub const fn reset_code(&self) -> &'static str {
        if self.plain {
            ""
        } else {
            Self::reset()
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `dark` theme.
    fn default() -> Self {
        Self::dark()
    }
}
