use crate::coords::Rect;
use crate::paint::Fill;
use crate::raster::Raster;
use crate::raster::shader::Shading;

impl Raster {
    /// Fills the pixels whose centres lie inside `rect`.
    ///
    /// Empty, non-finite and off-canvas rects draw nothing.
    pub fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        let Some(span) = rect.pixel_span(self.width(), self.height()) else {
            return;
        };
        let Some(shading) = Shading::resolve(fill) else {
            return;
        };
        for y in span.y0..span.y1 {
            self.shade_run(&shading, y, span.x0, span.x1);
        }
    }

    /// Fills the whole raster with `fill`.
    #[inline]
    pub fn fill_all(&mut self, fill: &Fill) {
        let full = Rect::from_size(self.width() as f32, self.height() as f32);
        self.fill_rect(full, fill);
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, Fill, Paint};
    use crate::raster::Raster;

    #[test]
    fn solid_rect_touches_only_covered_pixels() {
        let mut r = Raster::new(6, 6);
        r.fill_rect(Rect::new(1.0, 2.0, 2.0, 3.0), &Fill::solid(Color::WHITE));
        assert_eq!(r.pixel(1, 2), Some(Color::WHITE));
        assert_eq!(r.pixel(2, 4), Some(Color::WHITE));
        assert_eq!(r.pixel(3, 2), Some(Color::transparent()));
        assert_eq!(r.pixel(1, 5), Some(Color::transparent()));
    }

    #[test]
    fn translucent_rect_blends_over_background() {
        let mut r = Raster::new(2, 1);
        r.fill(Color::BLACK);
        r.fill_all(&Fill::new(Paint::solid(Color::WHITE), 51));
        assert_eq!(r.pixel(0, 0), Some(Color::rgb(51, 51, 51)));
    }

    #[test]
    fn horizontal_gradient_increases_left_to_right() {
        let mut r = Raster::new(8, 1);
        let paint = Paint::linear(Vec2::zero(), Vec2::new(8.0, 0.0), &[Color::BLACK, Color::WHITE], None);
        r.fill_all(&Fill::opaque(paint));
        let reds: Vec<u8> = (0..8).map(|x| r.pixel(x, 0).unwrap().r).collect();
        assert!(reds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn off_canvas_rect_is_noop() {
        let mut r = Raster::new(4, 4);
        let before = r.clone();
        r.fill_rect(Rect::new(10.0, 10.0, 5.0, 5.0), &Fill::solid(Color::WHITE));
        r.fill_rect(Rect::new(1.0, 1.0, 0.0, 2.0), &Fill::solid(Color::WHITE));
        assert_eq!(r, before);
    }
}
