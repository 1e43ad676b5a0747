use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Fill, Paint, blend_rgb};

use crate::palette::{accent_color, base_color};
use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Concentric rings stepping from accent (outside) to base (centre), plus a glow.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let (w, h) = (ctx.width, ctx.height);
    let base = base_color(stream, ctx.is_dark);
    let accent = accent_color(stream, ctx.is_dark);
    raster.fill(base);

    let center = Vec2::new(w * stream.range_f32(0.3, 0.4), h * stream.range_f32(0.3, 0.4));
    let max_radius = ctx.max_dim() * 1.2;
    let rings = stream.int_from(8, 12);

    // Outermost first so each smaller ring lands on top.
    for i in (0..=rings).rev() {
        let fraction = i as f32 / rings as f32;
        let color = blend_rgb(base, accent, fraction);
        raster.fill_circle(center, max_radius * fraction, &Fill::solid(color));
    }

    let glow_center = Vec2::new(w * stream.range_f32(0.1, 0.8), h * stream.range_f32(0.1, 0.8));
    let glow = accent_color(stream, ctx.is_dark).with_alpha(stream.int_from(40, 50));
    let radius = ctx.max_dim() * 0.6;
    let paint = Paint::radial(glow_center, radius, &[glow, glow.with_alpha(0)], None);
    raster.fill_circle(glow_center, radius, &Fill::opaque(paint));
}
