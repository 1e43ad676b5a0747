//! Coordinate and geometry types shared by the raster and the pattern code.
//!
//! Canonical raster space:
//! - Physical pixels, one unit per pixel
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`; coverage tests use its
//! centre `(x + 0.5, y + 0.5)`.

mod rect;
mod vec2;

pub use rect::{PixelSpan, Rect};
pub use vec2::Vec2;
