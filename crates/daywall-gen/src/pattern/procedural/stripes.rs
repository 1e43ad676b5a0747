use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Fill, Paint, blend_rgb};

use crate::palette::{accent_color, base_color};
use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Translucent slanted stripes over a diagonal base gradient.
///
/// Stripe `i` is a parallelogram whose top edge ends at `i * spacing` and
/// whose bottom edge is shifted left by the canvas height (45° slant).
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let (w, h) = (ctx.width, ctx.height);
    let base = base_color(stream, ctx.is_dark);
    let accent = accent_color(stream, ctx.is_dark);

    let tinted = blend_rgb(base, accent, 0.3);
    raster.fill_all(&Fill::opaque(Paint::linear(Vec2::zero(), Vec2::new(w, h), &[base, tinted], None)));

    let stripes = stream.int_from(10, 15);
    let spacing = (w + h) / stripes as f32;
    let stripe_w = spacing * 0.7;
    let alternate = blend_rgb(base, accent, 0.7);

    for i in 0..=stripes {
        let offset = i as f32 * spacing;
        let alpha = stream.int_from(20, 60);
        let color = (if i % 2 == 0 { accent } else { alternate }).with_alpha(alpha);

        let quad = [
            Vec2::new(offset - stripe_w, 0.0),
            Vec2::new(offset, 0.0),
            Vec2::new(offset - h, h),
            Vec2::new(offset - h - stripe_w, h),
        ];
        raster.fill_polygon(&quad, &Fill::solid(color));
    }
}
