//! Where an image's `src` points and how to read pixels from it.
//!
//! Only local files are decoded. Remote sources are never fetched; callers
//! render a placeholder for them instead.

use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("remote image '{0}' is not fetched")]
    Remote(String),

    #[error("failed to open image '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    pub fn classify(src: &str) -> Self {
        let lower = src.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(src.to_string())
        } else if let Some(path) = src.strip_prefix("file://") {
            ImageSource::Local(PathBuf::from(path))
        } else {
            ImageSource::Local(PathBuf::from(src))
        }
    }

    /// Short label for thumbnails and placeholders: the last path segment.
    pub fn label(src: &str) -> &str {
        src.rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(src)
    }
}

/// Decode the image behind `src` into RGBA pixels.
pub fn load_rgba(src: &str) -> Result<RgbaImage, SourceError> {
    match ImageSource::classify(src) {
        ImageSource::Remote(url) => Err(SourceError::Remote(url)),
        ImageSource::Local(path) => decode_file(&path),
    }
}

fn decode_file(path: &Path) -> Result<RgbaImage, SourceError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::gallery::SEED_SOURCES;

    #[test]
    fn test_classify() {
        assert_eq!(
            ImageSource::classify(SEED_SOURCES[0]),
            ImageSource::Remote(SEED_SOURCES[0].to_string())
        );
        assert_eq!(
            ImageSource::classify("file:///tmp/a.png"),
            ImageSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ImageSource::classify("pics/b.jpg"),
            ImageSource::Local(PathBuf::from("pics/b.jpg"))
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(ImageSource::label("https://host/dir/photo.jpg"), "photo.jpg");
        assert_eq!(ImageSource::label("photo.jpg"), "photo.jpg");
    }

    #[test]
    fn test_remote_is_not_fetched() {
        assert!(matches!(load_rgba(SEED_SOURCES[1]), Err(SourceError::Remote(_))));
    }

    #[test]
    fn test_load_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_rgba(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 0), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        assert!(matches!(
            load_rgba(path.to_str().unwrap()),
            Err(SourceError::Open { .. })
        ));
    }
}
