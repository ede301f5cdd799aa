//! Editor configuration.
//!
//! There is deliberately no config file: the application persists nothing
//! between runs. `Config` exists so the defaults are explicit and
//! injectable (tests and the UI construct sessions from it) rather than
//! scattered as magic values.

use serde::{Deserialize, Serialize};

use quillpad_buffer::FontSetting;

/// Main editor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font family applied at startup
    pub font_family: String,

    /// Font size applied at startup
    pub font_size: u16,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let font = FontSetting::default();
        Self {
            font_family: font.family,
            font_size: font.size,
        }
    }
}

impl Config {
    /// Returns the startup font described by this configuration.
    pub fn startup_font(&self) -> FontSetting {
        FontSetting::new(self.editor.font_family.clone(), self.editor.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_startup_font() {
        let config = Config::default();
        assert_eq!(config.startup_font(), FontSetting::new("Arial", 12));
    }
}
