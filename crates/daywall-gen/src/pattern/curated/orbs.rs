use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Fill, Paint, blend_rgb};

use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

const ORB_STOPS: [f32; 3] = [0.0, 0.55, 1.0];

/// Muted two-color base, then 5–9 soft orbs fading into the background.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let base = ctx.pick_colors(2, stream);
    let corner = Vec2::new(ctx.width, ctx.height);
    raster.fill_all(&Fill::new(Paint::linear(Vec2::zero(), corner, &base, None), 200));

    let orbs = stream.int_from(5, 5);
    for _ in 0..orbs {
        let color = ctx.pick_color(stream);
        let center = ctx.random_point(stream);
        let radius = ctx.min_dim() * stream.range_f32(0.15, 0.35);
        let alpha = stream.int_from(180, 60);

        let stops = [color, blend_rgb(color, ctx.background, 0.5), color.with_alpha(0)];
        let paint = Paint::radial(center, radius, &stops, Some(&ORB_STOPS));
        raster.fill_circle(center, radius, &Fill::new(paint, alpha));
    }
}
