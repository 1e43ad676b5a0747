use std::f32::consts::TAU;

use daywall_engine::Raster;
use daywall_engine::paint::{Color, Fill, Paint, blend_rgba};

use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

const GLOW_STOPS: [f32; 3] = [0.0, 0.5, 1.0];

/// Strong three-color base at a random angle, then 6–10 glowing blobs.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let base = ctx.pick_colors(3, stream);
    let angle = stream.next_float() * TAU;
    let (start, end) = ctx.axis_through_center(angle, ctx.diagonal() * 0.5);
    raster.fill_all(&Fill::new(Paint::linear(start, end, &base, None), 230));

    let glows = stream.int_from(6, 5);
    for _ in 0..glows {
        let color = ctx.pick_color(stream);
        let center = ctx.random_point(stream);
        let radius = ctx.max_dim() * stream.range_f32(0.2, 0.4);
        let alpha = stream.int_from(140, 80);

        let stops = glow_stops(color, ctx.background);
        let paint = Paint::radial(center, radius, &stops, Some(&GLOW_STOPS));
        raster.fill_circle(center, radius, &Fill::new(paint, alpha));
    }
}

/// Glow color fading out through a half-transparent middle into the
/// background at alpha 0.
fn glow_stops(color: Color, background: Color) -> [Color; 3] {
    let fade = background.with_alpha(0);
    [color, blend_rgba(color, fade, 0.6), fade]
}
