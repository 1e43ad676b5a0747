use daywall_engine::Raster;
use daywall_engine::paint::{Fill, Paint};

use crate::palette::{accent_color, base_color};
use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

/// Flat base with 3–6 large radial blobs.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    raster.fill(base_color(stream, ctx.is_dark));

    let blobs = stream.int_from(3, 4);
    for _ in 0..blobs {
        let center = ctx.random_point(stream);
        let radius = ctx.max_dim() * stream.range_f32(0.3, 0.5);
        let color = accent_color(stream, ctx.is_dark).with_alpha(stream.int_from(60, 100));

        let paint = Paint::radial(center, radius, &[color, color.with_alpha(0)], None);
        raster.fill_circle(center, radius, &Fill::opaque(paint));
    }
}
