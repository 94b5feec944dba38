//! Configuration management for frameform.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use crate::ui::layout::FrameStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub glyphs: GlyphConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl EngineConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.frameform.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(".frameform.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/frameform/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "frameform", "frameform") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (FRAMEFORM__*)
        builder = builder.add_source(
            Environment::with_prefix("FRAMEFORM")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        loaded.style()?;
        Ok(loaded)
    }

    /// Resolve the glyphs and labels into the style used by the layout engine
    pub fn style(&self) -> Result<FrameStyle, ConfigError> {
        Ok(FrameStyle {
            border: single_char("glyphs.border", &self.glyphs.border)?,
            pointer: single_char("glyphs.pointer", &self.glyphs.pointer)?,
            cursor: single_char("glyphs.cursor", &self.glyphs.cursor)?,
            mask: single_char("glyphs.mask", &self.glyphs.mask)?,
            cancel: self.labels.cancel.clone(),
            error: self.labels.error.clone(),
            notice: self.labels.notice.clone(),
            separator: self.labels.separator.clone(),
            colors: self.ui.colors,
        })
    }
}

fn single_char(key: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Invalid(format!(
            "{} must be exactly one character, got {:?}",
            key, value
        ))),
    }
}

/// Glyphs drawn by the layout engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Frame border character
    #[serde(default = "default_border")]
    pub border: String,
    /// Marker in front of the selected row
    #[serde(default = "default_pointer")]
    pub pointer: String,
    /// Edit cursor appended to the field being edited
    #[serde(default = "default_cursor")]
    pub cursor: String,
    /// Placeholder substituted for each character of a hidden field
    #[serde(default = "default_mask")]
    pub mask: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            border: default_border(),
            pointer: default_pointer(),
            cursor: default_cursor(),
            mask: default_mask(),
        }
    }
}

fn default_border() -> String {
    "#".to_string()
}

fn default_pointer() -> String {
    "\u{25b8}".to_string()
}

fn default_cursor() -> String {
    "\u{258d}".to_string()
}

fn default_mask() -> String {
    "*".to_string()
}

/// Fixed labels rendered by menus and forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label of the synthetic cancel/dismiss slot
    #[serde(default = "default_cancel")]
    pub cancel: String,
    /// Prefix of error rows
    #[serde(default = "default_error")]
    pub error: String,
    /// Prefix of notification rows
    #[serde(default = "default_notice")]
    pub notice: String,
    /// Separator between a field label and its value
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            cancel: default_cancel(),
            error: default_error(),
            notice: default_notice(),
            separator: default_separator(),
        }
    }
}

fn default_cancel() -> String {
    "CANCEL".to_string()
}

fn default_error() -> String {
    "Error".to_string()
}

fn default_notice() -> String {
    "Notice".to_string()
}

fn default_separator() -> String {
    ": ".to_string()
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Emit ANSI colors for highlighted rows
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Terminal width below which an undersized-terminal warning is logged
    #[serde(default = "default_min_cols")]
    pub min_cols: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            min_cols: default_min_cols(),
        }
    }
}

fn default_colors() -> bool {
    true
}

fn default_min_cols() -> u16 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.glyphs.border, "#");
        assert_eq!(config.glyphs.pointer, "▸");
        assert_eq!(config.glyphs.cursor, "▍");
        assert_eq!(config.labels.cancel, "CANCEL");
        assert_eq!(config.labels.separator, ": ");
        assert!(config.ui.colors);
        assert_eq!(config.ui.min_cols, 20);
    }

    #[test]
    fn test_default_style_matches_layout_default() {
        let style = EngineConfig::default().style().unwrap();
        assert_eq!(style, FrameStyle::default());
    }

    #[test]
    fn test_project_config_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".frameform.toml"),
            "[glyphs]\nmask = \"o\"\n\n[labels]\ncancel = \"BACK\"\n",
        )
        .unwrap();

        let config = EngineConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.glyphs.mask, "o");
        assert_eq!(config.labels.cancel, "BACK");
        // Untouched keys keep their defaults
        assert_eq!(config.glyphs.border, "#");
    }

    #[test]
    fn test_multi_char_glyph_rejected() {
        let mut config = EngineConfig::default();
        config.glyphs.border = "##".to_string();
        assert!(matches!(config.style(), Err(ConfigError::Invalid(_))));

        config.glyphs.border = String::new();
        assert!(config.style().is_err());
    }
}
