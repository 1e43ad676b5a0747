use std::f32::consts::TAU;

use daywall_engine::Raster;
use daywall_engine::paint::{Fill, Paint};

use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// 4–6 full-canvas linear gradients at random angles, stacked in draw order.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let layers = stream.int_from(4, 3);
    let half = ctx.diagonal() * 0.5;

    for _ in 0..layers {
        let count = 2 + stream.next_int(2) as usize;
        let colors = ctx.pick_colors(count, stream);
        let angle = stream.next_float() * TAU;
        let (start, end) = ctx.axis_through_center(angle, half);
        let alpha = stream.int_from(160, 80);

        raster.fill_all(&Fill::new(Paint::linear(start, end, &colors, None), alpha));
    }
}
