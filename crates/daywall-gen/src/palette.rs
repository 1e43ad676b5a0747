//! Theme-conditioned colors.
//!
//! Two strategies live here:
//! - fixed 16-entry tables per theme, sampled with [`pick`]
//! - HSV sampling ([`base_color`], [`accent_color`]) with theme-dependent
//!   saturation/value ranges
//!
//! Which one a generation uses is decided by its pattern pack.

use daywall_engine::paint::Color;

use crate::rng::RandomStream;

const DARK_COLORS: [Color; 16] = [
    Color::from_hex(0x1B2A49),
    Color::from_hex(0x2E1F4F),
    Color::from_hex(0x3B1C32),
    Color::from_hex(0x0F3D3E),
    Color::from_hex(0x14325C),
    Color::from_hex(0x4A1942),
    Color::from_hex(0x1F4E5F),
    Color::from_hex(0x263A29),
    Color::from_hex(0x5B2333),
    Color::from_hex(0x2C3E50),
    Color::from_hex(0x3D2C8D),
    Color::from_hex(0x16213E),
    Color::from_hex(0x533483),
    Color::from_hex(0x0B4F6C),
    Color::from_hex(0x6B2D5C),
    Color::from_hex(0x2D4059),
];

const LIGHT_COLORS: [Color; 16] = [
    Color::from_hex(0xFDE2E4),
    Color::from_hex(0xE2ECE9),
    Color::from_hex(0xFFF1E6),
    Color::from_hex(0xDFE7FD),
    Color::from_hex(0xF0EFEB),
    Color::from_hex(0xE8DFF5),
    Color::from_hex(0xDDEDEA),
    Color::from_hex(0xFAF3DD),
    Color::from_hex(0xE4F0D0),
    Color::from_hex(0xD8E2DC),
    Color::from_hex(0xFFE5D9),
    Color::from_hex(0xEAE4E9),
    Color::from_hex(0xCDE7F0),
    Color::from_hex(0xF8EDEB),
    Color::from_hex(0xE3F2FD),
    Color::from_hex(0xF1E3D3),
];

const DARK_BACKGROUND: Color = Color::from_hex(0x0E0F14);
const LIGHT_BACKGROUND: Color = Color::from_hex(0xF3F1EC);

/// An ordered, immutable set of candidate colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color],
}

impl Palette {
    /// Deep, mid-saturation tones.
    pub const DARK: Palette = Palette { colors: &DARK_COLORS };
    /// Soft, low-saturation tones.
    pub const LIGHT: Palette = Palette { colors: &LIGHT_COLORS };

    #[inline]
    pub const fn for_theme(is_dark: bool) -> Palette {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }

    #[inline]
    pub const fn colors(&self) -> &'static [Color] {
        self.colors
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Returns `n` distinct palette entries in shuffled order.
///
/// Shuffles the index order with `stream` and takes the first `n`. Requests
/// larger than the palette are clamped to the palette size.
pub fn pick(palette: &Palette, n: usize, stream: &mut RandomStream) -> Vec<Color> {
    let n = if n > palette.len() {
        log::warn!("requested {n} colors from a {}-color palette; clamping", palette.len());
        palette.len()
    } else {
        n
    };

    let mut order: Vec<usize> = (0..palette.len()).collect();
    stream.shuffle(&mut order);
    order.into_iter().take(n).map(|i| palette.colors[i]).collect()
}

/// Flat fill drawn before any pattern.
#[inline]
pub const fn background(is_dark: bool) -> Color {
    if is_dark { DARK_BACKGROUND } else { LIGHT_BACKGROUND }
}

/// Saturation/value window for one HSV sample, as `(base, span)` pairs.
#[derive(Debug, Clone, Copy)]
struct HsvRange {
    s: (f32, f32),
    v: (f32, f32),
}

const DARK_BASE: HsvRange = HsvRange { s: (0.3, 0.5), v: (0.05, 0.15) };
const LIGHT_BASE: HsvRange = HsvRange { s: (0.05, 0.2), v: (0.85, 0.15) };
const DARK_ACCENT: HsvRange = HsvRange { s: (0.4, 0.5), v: (0.15, 0.35) };
const LIGHT_ACCENT: HsvRange = HsvRange { s: (0.15, 0.35), v: (0.7, 0.3) };

/// Samples hue, then saturation, then value as `base + f * range`.
fn sample_hsv(stream: &mut RandomStream, range: HsvRange) -> Color {
    let h = stream.next_float() * 360.0;
    let s = stream.range_f32(range.s.0, range.s.1);
    let v = stream.range_f32(range.v.0, range.v.1);
    Color::from_hsv(h, s, v)
}

/// Background-leaning color: dark s 0.3–0.8 / v 0.05–0.20, light s 0.05–0.25 / v 0.85–1.0.
pub fn base_color(stream: &mut RandomStream, is_dark: bool) -> Color {
    sample_hsv(stream, if is_dark { DARK_BASE } else { LIGHT_BASE })
}

/// Brighter companion: dark s 0.4–0.9 / v 0.15–0.50, light s 0.15–0.50 / v 0.70–1.0.
pub fn accent_color(stream: &mut RandomStream, is_dark: bool) -> Color {
    sample_hsv(stream, if is_dark { DARK_ACCENT } else { LIGHT_ACCENT })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn palettes_have_sixteen_distinct_entries() {
        for p in [Palette::DARK, Palette::LIGHT] {
            assert_eq!(p.len(), 16);
            let set: HashSet<Color> = p.colors().iter().copied().collect();
            assert_eq!(set.len(), 16);
        }
    }

    #[test]
    fn dark_tables_are_darker_than_light_tables() {
        let max_dark = Palette::DARK.colors().iter().map(|c| c.luma()).fold(0.0, f32::max);
        let min_light = Palette::LIGHT.colors().iter().map(|c| c.luma()).fold(255.0, f32::min);
        assert!(max_dark < min_light);
        assert!(background(true).luma() < background(false).luma());
    }

    #[test]
    fn pick_returns_distinct_colors() {
        for seed in 0..200 {
            let mut s = RandomStream::new(seed);
            for n in 0..=16 {
                let got = pick(&Palette::DARK, n, &mut s);
                assert_eq!(got.len(), n);
                let set: HashSet<Color> = got.iter().copied().collect();
                assert_eq!(set.len(), n);
            }
        }
    }

    #[test]
    fn pick_clamps_oversized_requests() {
        let mut s = RandomStream::new(1);
        let got = pick(&Palette::LIGHT, 40, &mut s);
        assert_eq!(got.len(), 16);
        let set: HashSet<Color> = got.iter().copied().collect();
        assert_eq!(set.len(), 16);
    }

    #[test]
    fn pick_is_deterministic() {
        let a = pick(&Palette::DARK, 3, &mut RandomStream::new(42));
        let b = pick(&Palette::DARK, 3, &mut RandomStream::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn hsv_samples_respect_theme() {
        let mut s = RandomStream::new(2024);
        for _ in 0..500 {
            let base = base_color(&mut s, true);
            assert!(base.r.max(base.g).max(base.b) <= 52); // v <= 0.20
            let accent = accent_color(&mut s, true);
            assert!(accent.r.max(accent.g).max(accent.b) <= 128); // v <= 0.50

            let light = base_color(&mut s, false);
            assert!(light.r.max(light.g).max(light.b) >= 216); // v >= 0.85
            let light_accent = accent_color(&mut s, false);
            assert!(light_accent.r.max(light_accent.g).max(light_accent.b) >= 178); // v >= 0.70
        }
    }

    #[test]
    fn hsv_samples_are_opaque() {
        let mut s = RandomStream::new(7);
        assert!(base_color(&mut s, false).is_opaque());
        assert!(accent_color(&mut s, true).is_opaque());
    }
}
