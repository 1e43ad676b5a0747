//! Wallpaper generator facade.
//!
//! Pipeline per call:
//! 1. validate dimensions (nothing is allocated for invalid input)
//! 2. seed a fresh [`RandomStream`]
//! 3. create the raster and fill the theme background
//! 4. select one pattern of the configured pack and run it
//!
//! Nothing survives between calls; concurrent calls never share state.

use daywall_engine::Raster;
use thiserror::Error;

use crate::palette;
use crate::pattern::{PatternCtx, PatternKind, PatternPack, select_pattern};
use crate::rng::RandomStream;
use crate::seed::Seed;

/// Generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Width or height is not a positive pixel count that fits in `u32`, or
    /// the RGBA buffer for that size would not fit in memory addresses.
    #[error("invalid dimensions {width}x{height}: width and height must be positive and addressable")]
    InvalidDimensions { width: i64, height: i64 },
}

/// Generator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Pattern pack used for every generation.
    pub pack: PatternPack,
}

/// Stateless wallpaper generator bound to one pattern pack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Renders the wallpaper for `seed`.
    pub fn generate(
        &self,
        width: i64,
        height: i64,
        is_dark: bool,
        seed: Seed,
    ) -> Result<Raster, GenerateError> {
        self.generate_with_kind(width, height, is_dark, seed).map(|(_, raster)| raster)
    }

    /// Like [`generate`](Self::generate), also reporting which pattern ran.
    pub fn generate_with_kind(
        &self,
        width: i64,
        height: i64,
        is_dark: bool,
        seed: Seed,
    ) -> Result<(PatternKind, Raster), GenerateError> {
        let (w, h) = validate(width, height)?;

        let mut stream = RandomStream::new(seed);
        let mut raster = Raster::new(w, h);
        raster.fill(palette::background(is_dark));

        let ctx = PatternCtx::new(w, h, is_dark);
        let kind = select_pattern(self.config.pack, &mut stream);
        log::debug!(
            "seed {seed}: drawing {kind} ({}#{}) at {w}x{h}, {}",
            self.config.pack,
            kind.index(),
            if is_dark { "dark" } else { "light" }
        );
        kind.draw(&mut raster, &mut stream, &ctx);

        Ok((kind, raster))
    }
}

/// Renders the wallpaper for `seed` with the default pattern pack.
pub fn generate(width: i64, height: i64, is_dark: bool, seed: Seed) -> Result<Raster, GenerateError> {
    Generator::default().generate(width, height, is_dark, seed)
}

fn validate(width: i64, height: i64) -> Result<(u32, u32), GenerateError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 && buffer_len(w, h).is_some() => Ok((w, h)),
        _ => {
            log::warn!("rejecting wallpaper size {width}x{height}");
            Err(GenerateError::InvalidDimensions { width, height })
        }
    }
}

/// Bytes needed for a `w × h` RGBA8 buffer, if addressable on this target.
fn buffer_len(w: u32, h: u32) -> Option<usize> {
    let bytes = u64::from(w).checked_mul(u64::from(h))?.checked_mul(4)?;
    usize::try_from(bytes).ok()
}
