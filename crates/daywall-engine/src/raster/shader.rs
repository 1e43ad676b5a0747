//! Per-pixel paint evaluation and source-over compositing.

use crate::coords::Vec2;
use crate::paint::gradient::{self, ColorStop};
use crate::paint::{Fill, Paint};

/// A `Fill` resolved into something cheap to evaluate per pixel.
pub(super) enum Shader<'a> {
    Solid([f32; 4]),
    Linear {
        start: Vec2,
        /// Axis divided by its squared length so `dot(p - start, axis) == t`.
        axis: Vec2,
        stops: &'a [ColorStop],
    },
    Radial {
        center: Vec2,
        inv_radius: f32,
        stops: &'a [ColorStop],
    },
}

/// Resolved fill: shader plus the overall alpha as a `[0, 1]` factor.
pub(super) struct Shading<'a> {
    shader: Shader<'a>,
    alpha: f32,
}

impl<'a> Shading<'a> {
    /// Returns `None` when the fill can never produce a visible pixel.
    pub(super) fn resolve(fill: &'a Fill) -> Option<Self> {
        if fill.alpha == 0 {
            return None;
        }
        let shader = match &fill.paint {
            Paint::Solid(c) => {
                if c.a == 0 {
                    return None;
                }
                Shader::Solid(c.to_f32())
            }
            Paint::LinearGradient(g) => {
                if g.is_valid() {
                    let d = g.end - g.start;
                    Shader::Linear {
                        start: g.start,
                        axis: d * (1.0 / d.length_squared()),
                        stops: &g.stops,
                    }
                } else {
                    // Degenerate axis: paint flat with the first stop.
                    Shader::Solid(g.stops.first()?.color.to_f32())
                }
            }
            Paint::RadialGradient(g) => {
                if !g.is_valid() {
                    return None;
                }
                Shader::Radial { center: g.center, inv_radius: 1.0 / g.radius, stops: &g.stops }
            }
        };
        Some(Self { shader, alpha: f32::from(fill.alpha) / 255.0 })
    }

    /// Straight-alpha source color at pixel centre `p`, alpha already scaled
    /// by the fill alpha.
    #[inline]
    pub(super) fn shade(&self, p: Vec2) -> [f32; 4] {
        let mut c = match &self.shader {
            Shader::Solid(c) => *c,
            Shader::Linear { start, axis, stops } => gradient::sample(stops, (p - *start).dot(*axis)),
            Shader::Radial { center, inv_radius, stops } => {
                gradient::sample(stops, (p - *center).length() * inv_radius)
            }
        };
        c[3] *= self.alpha;
        c
    }
}

/// Source-over in straight alpha. `src` is byte-scale with its final alpha.
#[inline]
pub(super) fn composite(dst: &mut [u8; 4], src: [f32; 4]) {
    let sa = src[3] / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let keep = da * (1.0 - sa);
    let out_a = sa + keep;

    for i in 0..3 {
        let c = (src[i] * sa + f32::from(dst[i]) * keep) / out_a;
        dst[i] = to_byte(c);
    }
    dst[3] = to_byte(out_a * 255.0);
}

#[inline]
fn to_byte(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}
