use daywall_engine::Raster;
use daywall_engine::coords::{Rect, Vec2};
use daywall_engine::paint::{Fill, Paint};

use crate::pattern::PatternCtx;
use crate::rng::RandomStream;

const BAND_STOPS: [f32; 4] = [0.0, 0.3, 0.7, 1.0];

/// Faint vertical wash, then 4–6 horizontal light bands.
///
/// Each band is a vertical `[bg, c, c, bg]` gradient plus a horizontal
/// `[bg, c, bg]` overlay limited to the band's rows. The `bg` stops are
/// transparent so bands fade into what is already drawn.
pub(crate) fn draw(raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
    let (w, h) = (ctx.width, ctx.height);
    let fade = ctx.background.with_alpha(0);

    let sky = ctx.pick_color(stream);
    let wash = Paint::linear(Vec2::zero(), Vec2::new(0.0, h), &[ctx.background, sky], None);
    raster.fill_all(&Fill::new(wash, 120));

    let bands = stream.int_from(4, 3);
    for _ in 0..bands {
        let color = ctx.pick_color(stream);
        let center_y = h * stream.range_f32(0.1, 0.8);
        let band_h = h * stream.range_f32(0.12, 0.25);
        let alpha = stream.int_from(120, 80);

        let top = center_y - band_h * 0.5;
        let band = Rect::new(0.0, top, w, band_h);

        let vertical = Paint::linear(
            Vec2::new(0.0, top),
            Vec2::new(0.0, top + band_h),
            &[fade, color, color, fade],
            Some(&BAND_STOPS),
        );
        raster.fill_rect(band, &Fill::new(vertical, alpha));

        let across = Paint::linear(
            Vec2::new(0.0, center_y),
            Vec2::new(w, center_y),
            &[fade, color, fade],
            None,
        );
        raster.fill_rect(band, &Fill::new(across, alpha / 2));
    }
}
