use daywall_engine::Raster;
use daywall_engine::coords::Vec2;
use daywall_engine::paint::{Fill, Paint, blend_rgb};

use crate::palette::{accent_color, base_color};
use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Faint circles and triangles over a vertical gradient.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let h = ctx.height;
    let base = base_color(stream, ctx.is_dark);
    let accent = accent_color(stream, ctx.is_dark);

    let bottom = blend_rgb(base, accent, 0.4);
    raster.fill_all(&Fill::opaque(Paint::linear(Vec2::zero(), Vec2::new(0.0, h), &[base, bottom], None)));

    let shapes = stream.int_from(5, 8);
    for _ in 0..shapes {
        let alpha = stream.int_from(15, 55);
        let tone = if stream.next_bool() { accent } else { accent_color(stream, ctx.is_dark) };
        let fill = Fill::solid(tone.with_alpha(alpha));

        if stream.next_bool() {
            let center = ctx.random_point(stream);
            let radius = ctx.min_dim() * stream.range_f32(0.05, 0.3);
            raster.fill_circle(center, radius, &fill);
        } else {
            let apex = ctx.random_point(stream);
            let size = ctx.min_dim() * stream.range_f32(0.1, 0.35);
            let drop = size * stream.range_f32(0.5, 1.0);
            let triangle = [
                apex,
                Vec2::new(apex.x + size, apex.y + drop),
                Vec2::new(apex.x - size * 0.5, apex.y + size),
            ];
            raster.fill_polygon(&triangle, &fill);
        }
    }
}
