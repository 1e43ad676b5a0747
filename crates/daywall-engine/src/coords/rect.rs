use super::Vec2;

/// Axis-aligned rectangle in raster pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Half-open range of whole pixels `[x0, x1) × [y0, y1)` inside a raster.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelSpan {
    #[inline]
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle anchored at the origin, e.g. a whole canvas.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same area with non-negative width and height.
    pub fn normalized(self) -> Self {
        let far = self.max();
        Rect::new(
            self.origin.x.min(far.x),
            self.origin.y.min(far.y),
            self.size.x.abs(),
            self.size.y.abs(),
        )
    }

    /// Pixels of a `width × height` raster whose centres fall inside the rect.
    ///
    /// Returns `None` when no pixel centre is covered (empty, non-finite or
    /// fully off-canvas rects).
    pub fn pixel_span(self, width: u32, height: u32) -> Option<PixelSpan> {
        if !self.is_finite() {
            return None;
        }
        let r = self.normalized();
        let max = r.max();

        let x0 = first_center_at_or_after(r.origin.x, width);
        let x1 = first_center_at_or_after(max.x, width);
        let y0 = first_center_at_or_after(r.origin.y, height);
        let y1 = first_center_at_or_after(max.y, height);

        if x0 >= x1 || y0 >= y1 {
            None
        } else {
            Some(PixelSpan { x0, y0, x1, y1 })
        }
    }
}

/// Index of the first pixel whose centre is `>= edge`, clamped to `[0, limit]`.
#[inline]
fn first_center_at_or_after(edge: f32, limit: u32) -> u32 {
    let idx = (edge - 0.5).ceil();
    if idx <= 0.0 {
        0
    } else if idx >= limit as f32 {
        limit
    } else {
        idx as u32
    }
}
