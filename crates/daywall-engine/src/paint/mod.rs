//! Paint model used by the raster.
//!
//! Scope:
//! - color representation (straight-alpha RGBA bytes) and blending
//! - paint sources (solid, linear and radial gradients)
//! - `Fill`: a paint plus an overall alpha multiplier
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;

pub use blend::{blend_rgb, blend_rgba, with_alpha};
pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient};

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Linear gradient between `start` and `end`; colors are spread evenly
    /// unless `positions` gives one position per color.
    #[inline]
    pub fn linear(start: Vec2, end: Vec2, colors: &[Color], positions: Option<&[f32]>) -> Self {
        Paint::LinearGradient(LinearGradient::new(start, end, colors, positions))
    }

    #[inline]
    pub fn radial(center: Vec2, radius: f32, colors: &[Color], positions: Option<&[f32]>) -> Self {
        Paint::RadialGradient(RadialGradient::new(center, radius, colors, positions))
    }
}

/// A paint applied with an overall alpha multiplier (`255` = as authored).
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub paint: Paint,
    pub alpha: u8,
}

impl Fill {
    #[inline]
    pub fn new(paint: Paint, alpha: i32) -> Self {
        Self { paint, alpha: alpha.clamp(0, 255) as u8 }
    }

    #[inline]
    pub fn opaque(paint: Paint) -> Self {
        Self { paint, alpha: 0xFF }
    }

    #[inline]
    pub fn solid(color: Color) -> Self {
        Self::opaque(Paint::Solid(color))
    }
}

impl From<Paint> for Fill {
    fn from(paint: Paint) -> Self {
        Fill::opaque(paint)
    }
}
