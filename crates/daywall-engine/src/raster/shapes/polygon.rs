use crate::coords::Vec2;
use crate::paint::Fill;
use crate::raster::Raster;
use crate::raster::shader::Shading;

impl Raster {
    /// Fills a closed polygon using the non-zero winding rule.
    ///
    /// The last point connects back to the first. Fewer than three points or
    /// any non-finite coordinate draws nothing.
    pub fn fill_polygon(&mut self, points: &[Vec2], fill: &Fill) {
        if points.len() < 3 || !points.iter().all(|p| p.is_finite()) {
            return;
        }
        let Some(shading) = Shading::resolve(fill) else {
            return;
        };

        let (w, h) = (self.width(), self.height());
        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        let y0 = (min_y - 0.5).ceil().max(0.0);
        let y1 = (max_y - 0.5).ceil().min(h as f32);
        if y0 >= y1 {
            return;
        }

        let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(points.len());
        for y in y0 as u32..y1 as u32 {
            let sy = y as f32 + 0.5;
            crossings.clear();

            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open in y so shared vertices are counted once.
                let (winding, lo, hi) = if a.y <= b.y { (1, a, b) } else { (-1, b, a) };
                if sy < lo.y || sy >= hi.y {
                    continue;
                }
                let x = lo.x + (sy - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
                crossings.push((x, winding));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut wind = 0;
            for pair in crossings.windows(2) {
                wind += pair[0].1;
                if wind == 0 {
                    continue;
                }
                // Pixel centres in [left, right).
                let x0 = (pair[0].0 - 0.5).ceil().max(0.0);
                let x1 = (pair[1].0 - 0.5).ceil().min(w as f32);
                if x0 < x1 {
                    self.shade_run(&shading, y, x0 as u32, x1 as u32);
                }
            }
        }
    }
}
