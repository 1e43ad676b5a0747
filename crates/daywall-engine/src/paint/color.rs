/// Straight-alpha RGBA color, one byte per channel.
///
/// Invariant:
/// - channels are *not* premultiplied; `a` only says how strongly the color
///   covers whatever is below it when composited.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Opaque color from hue (degrees), saturation and value in `[0, 1]`.
    ///
    /// Hues outside `[0, 360)` are treated as 0; `s` and `v` are clamped.
    /// Each channel is rounded to the nearest byte.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let v = channel_from_unit(v);
        let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) };
        if s <= 0.0 {
            return Self::rgb(v, v, v);
        }

        let hx = if !(0.0..360.0).contains(&h) { 0.0 } else { h / 60.0 };
        let sector = hx.floor();
        let f = hx - sector;
        let vf = f32::from(v);

        let p = round_byte((1.0 - s) * vf);
        let q = round_byte((1.0 - s * f) * vf);
        let t = round_byte((1.0 - s * (1.0 - f)) * vf);

        match sector as u8 {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Same color with its alpha replaced; `alpha` is clamped to `[0, 255]`.
    #[inline]
    pub fn with_alpha(self, alpha: i32) -> Self {
        Self { a: alpha.clamp(0, 255) as u8, ..self }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::rgba(px[0], px[1], px[2], px[3])
    }

    /// Channels as `f32` in byte scale (`0.0..=255.0`).
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [f32::from(self.r), f32::from(self.g), f32::from(self.b), f32::from(self.a)]
    }

    /// Rec.601 luma of the RGB channels, `0.0..=255.0`. Alpha is ignored.
    #[inline]
    pub fn luma(self) -> f32 {
        0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)
    }
}

#[inline]
fn channel_from_unit(x: f32) -> u8 {
    if x.is_nan() { 0 } else { round_byte(x.clamp(0.0, 1.0) * 255.0) }
}

/// Rounds a byte-scale float to the nearest `u8`, saturating.
#[inline]
pub(crate) fn round_byte(x: f32) -> u8 {
    if x.is_nan() { 0 } else { x.round().clamp(0.0, 255.0) as u8 }
}
