//! Editor options and the configuration handle
//!
//! View parts never read options from a global. They receive a
//! [`SharedConfiguration`] at construction and re-query it when a
//! [`ConfigurationChangedEvent`] says the relevant group changed.
//!
//! ```rust
//! use vellum_core::config::{Configuration, EditorOptions};
//!
//! let config = Configuration::shared(EditorOptions::default());
//! assert!(config.use_shadows());
//!
//! let mut options = config.options();
//! options.scrollbar.use_shadows = false;
//! let delta = config.apply(options);
//! assert!(delta.scrollbar);
//! assert!(!config.use_shadows());
//! ```

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::ConfigurationChangedEvent;

/// Top-level editor options (editor.toml)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EditorOptions {
    #[serde(default)]
    pub scrollbar: ScrollbarOptions,
    #[serde(default)]
    pub font: FontOptions,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default)]
    pub word_wrap: bool,
}

impl EditorOptions {
    /// Parse options from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load options from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Compute which option groups differ between `self` and `other`
    pub fn diff(&self, other: &EditorOptions) -> ConfigurationChangedEvent {
        ConfigurationChangedEvent {
            scrollbar: self.scrollbar != other.scrollbar,
            font_info: self.font != other.font,
            line_height: self.line_height != other.line_height,
            word_wrap: self.word_wrap != other.word_wrap,
        }
    }
}

fn default_line_height() -> f32 {
    19.0
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarOptions::default(),
            font: FontOptions::default(),
            line_height: default_line_height(),
            word_wrap: false,
        }
    }
}

/// Scrollbar options
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScrollbarOptions {
    /// Draw a shadow at the top edge when the viewport is scrolled
    #[serde(default = "default_true")]
    pub use_shadows: bool,
    #[serde(default = "default_vertical_scrollbar_size")]
    pub vertical_scrollbar_size: f32,
    #[serde(default = "default_horizontal_scrollbar_size")]
    pub horizontal_scrollbar_size: f32,
}

fn default_true() -> bool {
    true
}

fn default_vertical_scrollbar_size() -> f32 {
    14.0
}

fn default_horizontal_scrollbar_size() -> f32 {
    10.0
}

impl Default for ScrollbarOptions {
    fn default() -> Self {
        Self {
            use_shadows: true,
            vertical_scrollbar_size: default_vertical_scrollbar_size(),
            horizontal_scrollbar_size: default_horizontal_scrollbar_size(),
        }
    }
}

/// Font options
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FontOptions {
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: f32,
}

fn default_font_family() -> String {
    "monospace".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
        }
    }
}

/// Shared handle to the editor configuration
pub type SharedConfiguration = Arc<Configuration>;

/// Owns the current [`EditorOptions`] snapshot
#[derive(Debug, Default)]
pub struct Configuration {
    options: RwLock<EditorOptions>,
}

impl Configuration {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options: RwLock::new(options),
        }
    }

    /// Create a configuration wrapped in a [`SharedConfiguration`]
    pub fn shared(options: EditorOptions) -> SharedConfiguration {
        Arc::new(Self::new(options))
    }

    /// Clone of the current options
    pub fn options(&self) -> EditorOptions {
        self.read().clone()
    }

    /// Whether scroll shadows are enabled
    pub fn use_shadows(&self) -> bool {
        self.read().scrollbar.use_shadows
    }

    /// Replace the options and report which groups changed
    pub fn apply(&self, options: EditorOptions) -> ConfigurationChangedEvent {
        let mut current = match self.options.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let delta = current.diff(&options);
        *current = options;

        if !delta.is_empty() {
            tracing::debug!(?delta, "editor options changed");
        }
        delta
    }

    fn read(&self) -> RwLockReadGuard<'_, EditorOptions> {
        match self.options.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert!(options.scrollbar.use_shadows);
        assert_eq!(options.scrollbar.vertical_scrollbar_size, 14.0);
        assert_eq!(options.font.family, "monospace");
        assert_eq!(options.line_height, 19.0);
    }

    #[test]
    fn test_parse_partial_toml() {
        let options = EditorOptions::from_toml_str(
            r#"
            word_wrap = true

            [scrollbar]
            use_shadows = false
            "#,
        )
        .unwrap();

        assert!(!options.scrollbar.use_shadows);
        assert_eq!(options.scrollbar.horizontal_scrollbar_size, 10.0);
        assert!(options.word_wrap);
        assert_eq!(options.line_height, 19.0);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = EditorOptions::from_toml_str("scrollbar = 3").unwrap_err();
        assert!(matches!(err, crate::error::ViewError::InvalidOptions(_)));
    }

    #[test]
    fn test_apply_reports_changed_groups() {
        let config = Configuration::new(EditorOptions::default());

        let mut options = config.options();
        options.font.size = 16.0;
        let delta = config.apply(options);
        assert!(delta.font_info);
        assert!(!delta.scrollbar);
        assert_eq!(config.options().font.size, 16.0);

        let delta = config.apply(config.options());
        assert!(delta.is_empty());
    }

    #[test]
    fn test_apply_toggles_shadows() {
        let config = Configuration::shared(EditorOptions::default());
        let mut options = config.options();
        options.scrollbar.use_shadows = false;

        let delta = config.apply(options);
        assert_eq!(delta, ConfigurationChangedEvent::scrollbar());
        assert!(!config.use_shadows());
    }
}
