//! Per-channel linear color interpolation.
//!
//! Blending happens on the raw byte channels; there is no gamma handling.
//! Two flavors exist: [`blend_rgb`] treats both inputs as opaque and always
//! returns an opaque color, [`blend_rgba`] also interpolates alpha.

use super::color::round_byte;
use super::Color;

/// Interpolates r, g and b; the result is opaque.
///
/// `ratio` is clamped to `[0, 1]`; NaN counts as 0.
#[inline]
pub fn blend_rgb(c1: Color, c2: Color, ratio: f32) -> Color {
    let t = clamp_ratio(ratio);
    Color::rgb(lerp_byte(c1.r, c2.r, t), lerp_byte(c1.g, c2.g, t), lerp_byte(c1.b, c2.b, t))
}

/// Interpolates all four channels.
///
/// `ratio` is clamped to `[0, 1]`; NaN counts as 0.
#[inline]
pub fn blend_rgba(c1: Color, c2: Color, ratio: f32) -> Color {
    let t = clamp_ratio(ratio);
    Color::rgba(
        lerp_byte(c1.r, c2.r, t),
        lerp_byte(c1.g, c2.g, t),
        lerp_byte(c1.b, c2.b, t),
        lerp_byte(c1.a, c2.a, t),
    )
}

/// Free-function spelling of [`Color::with_alpha`].
#[inline]
pub fn with_alpha(color: Color, alpha: i32) -> Color {
    color.with_alpha(alpha)
}

#[inline]
fn clamp_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
}

#[inline]
fn lerp_byte(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    round_byte(a * (1.0 - t) + b * t)
}

/// Unrounded straight-alpha interpolation used by gradient shading.
#[inline]
pub(crate) fn lerp_f32(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let s = 1.0 - t;
    [
        a[0] * s + b[0] * t,
        a[1] * s + b[1] * t,
        a[2] * s + b[2] * t,
        a[3] * s + b[3] * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgba(10, 200, 33, 255);
    const B: Color = Color::rgba(250, 0, 34, 40);

    fn between(x: u8, a: u8, b: u8) -> bool {
        x >= a.min(b) && x <= a.max(b)
    }

    #[test]
    fn rgba_endpoints_are_exact() {
        assert_eq!(blend_rgba(A, B, 0.0), A);
        assert_eq!(blend_rgba(A, B, 1.0), B);
    }

    #[test]
    fn rgb_endpoints_are_exact_for_opaque_inputs() {
        let b = B.with_alpha(255);
        assert_eq!(blend_rgb(A, b, 0.0), A);
        assert_eq!(blend_rgb(A, b, 1.0), b);
    }

    #[test]
    fn rgb_result_is_opaque() {
        assert!(blend_rgb(A, B, 0.5).is_opaque());
    }

    #[test]
    fn channels_stay_between_inputs() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let c = blend_rgba(A, B, t);
            assert!(between(c.r, A.r, B.r));
            assert!(between(c.g, A.g, B.g));
            assert!(between(c.b, A.b, B.b));
            assert!(between(c.a, A.a, B.a));
        }
    }

    #[test]
    fn midpoint_rounds_to_nearest() {
        let c = blend_rgb(Color::rgb(0, 0, 0), Color::rgb(255, 1, 3), 0.5);
        assert_eq!((c.r, c.g, c.b), (128, 1, 2));
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(blend_rgba(A, B, -3.0), A);
        assert_eq!(blend_rgba(A, B, 7.5), B);
        assert_eq!(blend_rgba(A, B, f32::NAN), A);
    }

    #[test]
    fn with_alpha_free_fn_clamps() {
        assert_eq!(with_alpha(A, -1).a, 0);
        assert_eq!(with_alpha(A, 1000).a, 255);
    }
}
