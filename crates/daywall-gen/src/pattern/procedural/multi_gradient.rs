use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Color, Fill, Paint, blend_rgb};

use crate::palette::{accent_color, base_color};
use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Base gradient, a crossing overlay and one soft radial highlight.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let (w, h) = (ctx.width, ctx.height);
    let base = base_color(stream, ctx.is_dark);
    let accent = accent_color(stream, ctx.is_dark);
    let mid = blend_rgb(base, accent, 0.5);

    let background = Paint::linear(Vec2::zero(), Vec2::new(w, h), &[base, mid], None);
    raster.fill_all(&Fill::opaque(background));

    let alpha = stream.int_from(100, 80);
    let first = accent.with_alpha(alpha);
    let second = accent_color(stream, ctx.is_dark).with_alpha(alpha);
    let overlay = Paint::linear(Vec2::new(w, 0.0), Vec2::new(0.0, h), &[first, second], None);
    raster.fill_all(&Fill::opaque(overlay));

    let center = Vec2::new(w * stream.range_f32(0.2, 0.6), h * stream.range_f32(0.2, 0.6));
    let radius = ctx.max_dim() * stream.range_f32(0.3, 0.4);
    let tint = if ctx.is_dark { Color::WHITE } else { accent };
    let highlight = tint.with_alpha(stream.int_from(30, 40));
    let glow = Paint::radial(center, radius, &[highlight, highlight.with_alpha(0)], None);
    raster.fill_circle(center, radius, &Fill::opaque(glow));
}
