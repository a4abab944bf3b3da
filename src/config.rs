//! Editor configuration loaded from a TOML file.
//!
//! Every field has a default, so a partial file (or none at all) is valid:
//!
//! ```toml
//! [layout]
//! position_divisor = 9.0
//!
//! [window]
//! width = 1200.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::editor::view::DEFAULT_POSITION_DIVISOR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("position_divisor must be positive, got {0}")]
    InvalidDivisor(f64),

    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
}

/// Geometry of the editing canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Logical drag units per percent of the canvas
    pub position_divisor: f64,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            position_divisor: DEFAULT_POSITION_DIVISOR,
            canvas_width: 900.0,
            canvas_height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl EditorConfig {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let divisor = self.layout.position_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::InvalidDivisor(divisor));
        }
        let (width, height) = (self.layout.canvas_width, self.layout.canvas_height);
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidCanvasSize { width, height });
        }
        Ok(())
    }
}

pub fn load_from_path(path: &Path) -> Result<EditorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    EditorConfig::from_toml(&content, path)
}

/// Load `path` when given, otherwise fall back to the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<EditorConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(EditorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config =
            EditorConfig::from_toml("[layout]\ncanvas_width = 640.0\n", Path::new("x.toml"))
                .unwrap();
        assert_eq!(config.layout.canvas_width, 640.0);
        assert_eq!(config.layout.position_divisor, DEFAULT_POSITION_DIVISOR);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = EditorConfig::from_toml("not = valid = toml", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let err = EditorConfig::from_toml("[layout]\nposition_divisor = 0.0\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDivisor(_)));
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let err = EditorConfig::from_toml("[layout]\ncanvas_height = 0.0\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCanvasSize { width, height } if width == 900.0 && height == 0.0
        ));

        let err = EditorConfig::from_toml("[layout]\ncanvas_width = -5.0\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCanvasSize { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("overlay-editor.toml");
        fs::write(&path, "[layout]\nposition_divisor = 4.5\n\n[window]\nheight = 720.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.layout.position_divisor, 4.5);
        assert_eq!(loaded.window.height, 720.0);
        assert_eq!(loaded.window.width, WindowConfig::default().width);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_or_default(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(load_or_default(None).unwrap(), EditorConfig::default());
    }
}
