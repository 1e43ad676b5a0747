//! Wallpaper destinations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use daywall_engine::Raster;
use image::ImageFormat;

/// Receives a finished wallpaper.
pub trait WallpaperSink {
    fn apply(&self, raster: &Raster) -> Result<()>;
}

/// Writes the wallpaper as a PNG file.
///
/// The image is written next to the target and renamed into place, so a
/// reader never sees a half-written file.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl WallpaperSink for PngSink {
    fn apply(&self, raster: &Raster) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let staging = self.staging_path();
        raster
            .image()
            .save_with_format(&staging, ImageFormat::Png)
            .with_context(|| format!("failed to encode PNG to {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("failed to move wallpaper into {}", self.path.display()))?;

        log::info!(
            "wrote {}x{} wallpaper to {}",
            raster.width(),
            raster.height(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use daywall_engine::paint::Color;

    use super::*;

    #[test]
    fn writes_a_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/wall.png");
        let mut raster = Raster::new(3, 2);
        raster.fill(Color::rgb(10, 20, 30));

        PngSink::new(&path).apply(&raster).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.as_raw().as_slice(), raster.as_raw());
        assert!(!dir.path().join("nested/wall.png.tmp").exists());
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        assert!(PngSink::new(&path).apply(&Raster::new(1, 1)).is_err());
    }
}
