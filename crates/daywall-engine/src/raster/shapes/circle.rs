use crate::coords::Vec2;
use crate::paint::Fill;
use crate::raster::Raster;
use crate::raster::shader::Shading;

impl Raster {
    /// Fills the pixels whose centres lie within `radius` of `center`.
    ///
    /// Zero, negative or non-finite radii draw nothing.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let Some(shading) = Shading::resolve(fill) else {
            return;
        };

        let (w, h) = (self.width(), self.height());
        let r2 = radius * radius;
        let Some((y0, y1)) = center_range(center.y - radius, center.y + radius, h) else {
            return;
        };

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            let rem = r2 - dy * dy;
            if rem < 0.0 {
                continue;
            }
            let half = rem.sqrt();
            if let Some((x0, x1)) = center_range(center.x - half, center.x + half, w) {
                self.shade_run(&shading, y, x0, x1);
            }
        }
    }
}

/// Pixel indices whose centre `c + 0.5` satisfies `lo <= c + 0.5 <= hi`,
/// clamped to `[0, limit)`, as a half-open range.
fn center_range(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
    let first = (lo - 0.5).ceil().max(0.0);
    let last = (hi - 0.5).floor().min(limit as f32 - 1.0);
    if first > last {
        return None;
    }
    Some((first as u32, last as u32 + 1))
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::paint::{Color, Fill, Paint};
    use crate::raster::Raster;

    fn painted(r: &Raster) -> usize {
        r.as_raw().chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    #[test]
    fn small_circle_covers_expected_pixels() {
        let mut r = Raster::new(10, 10);
        r.fill_circle(Vec2::new(5.0, 5.0), 1.0, &Fill::solid(Color::WHITE));
        // Centres (4.5|5.5, 4.5|5.5) are ~0.707 away; the next ring is > 1.
        assert_eq!(painted(&r), 4);
        assert_eq!(r.pixel(4, 4), Some(Color::WHITE));
        assert_eq!(r.pixel(3, 5), Some(Color::transparent()));
    }

    #[test]
    fn large_circle_area_is_close_to_pi_r_squared() {
        let mut r = Raster::new(100, 100);
        r.fill_circle(Vec2::new(50.0, 50.0), 30.0, &Fill::solid(Color::WHITE));
        let area = painted(&r) as f32;
        let expected = std::f32::consts::PI * 900.0;
        assert!((area - expected).abs() / expected < 0.02);
    }

    #[test]
    fn degenerate_circles_draw_nothing() {
        let mut r = Raster::new(8, 8);
        r.fill_circle(Vec2::new(4.0, 4.0), 0.0, &Fill::solid(Color::WHITE));
        r.fill_circle(Vec2::new(4.0, 4.0), -3.0, &Fill::solid(Color::WHITE));
        r.fill_circle(Vec2::new(f32::NAN, 4.0), 3.0, &Fill::solid(Color::WHITE));
        r.fill_circle(Vec2::new(-50.0, -50.0), 3.0, &Fill::solid(Color::WHITE));
        assert_eq!(painted(&r), 0);
    }

    #[test]
    fn radial_gradient_fades_outward() {
        let mut r = Raster::new(21, 1);
        r.fill(Color::BLACK);
        let paint = Paint::radial(
            Vec2::new(10.5, 0.5),
            10.0,
            &[Color::WHITE, Color::WHITE.with_alpha(0)],
            None,
        );
        r.fill_circle(Vec2::new(10.5, 0.5), 10.0, &Fill::opaque(paint));
        let centre = r.pixel(10, 0).unwrap().r;
        let edge = r.pixel(1, 0).unwrap().r;
        assert_eq!(centre, 255);
        assert!(edge < 40);
    }
}
