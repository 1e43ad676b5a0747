use std::f32::consts::TAU;

use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Fill, Paint};

use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Three stacked gradients: corner to corner, the opposite diagonal, then a
/// faint one at a random angle.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let (w, h) = (ctx.width, ctx.height);

    let primary = ctx.pick_colors(3, stream);
    raster.fill_all(&Fill::opaque(Paint::linear(Vec2::zero(), Vec2::new(w, h), &primary, None)));

    let secondary = ctx.pick_colors(3, stream);
    let paint = Paint::linear(Vec2::new(w, 0.0), Vec2::new(0.0, h), &secondary, None);
    raster.fill_all(&Fill::new(paint, 140));

    let tertiary = ctx.pick_colors(2, stream);
    let angle = stream.next_float() * TAU;
    let (start, end) = ctx.axis_through_center(angle, ctx.diagonal() * 0.5);
    raster.fill_all(&Fill::new(Paint::linear(start, end, &tertiary, None), 90));
}
