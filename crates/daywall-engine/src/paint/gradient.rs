use crate::coords::Vec2;

use super::blend::lerp_f32;
use super::Color;

/// A single gradient stop.
///
/// `t` is the position along the gradient in `[0, 1]`. Stops are expected in
/// ascending `t` order; sampling clamps outside the first/last stop (pad spread).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Builds stops from colors and optional explicit positions.
///
/// Without positions (or when the counts disagree) the colors are spread
/// evenly over `[0, 1]`. A single color becomes a flat stop at `t = 0`.
pub fn stops(colors: &[Color], positions: Option<&[f32]>) -> Vec<ColorStop> {
    match positions {
        Some(ts) if ts.len() == colors.len() => colors
            .iter()
            .zip(ts)
            .map(|(&color, &t)| ColorStop::new(t, color))
            .collect(),
        Some(ts) => {
            log::debug!(
                "gradient has {} colors but {} positions; spacing evenly",
                colors.len(),
                ts.len()
            );
            even_stops(colors)
        }
        None => even_stops(colors),
    }
}

fn even_stops(colors: &[Color]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
        .collect()
}

/// Samples the stop list at `t`, returning straight-alpha byte-scale channels.
///
/// Empty stop lists sample as transparent.
pub(crate) fn sample(stops: &[ColorStop], t: f32) -> [f32; 4] {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return [0.0; 4],
    };
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    if t <= first.t {
        return first.color.to_f32();
    }
    if t >= last.t {
        return last.color.to_f32();
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.t {
            let span = b.t - a.t;
            if span <= 0.0 {
                return b.color.to_f32();
            }
            return lerp_f32(a.color.to_f32(), b.color.to_f32(), (t - a.t) / span);
        }
    }
    last.color.to_f32()
}

/// Linear gradient from `start` (t = 0) to `end` (t = 1) in raster pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, colors: &[Color], positions: Option<&[f32]>) -> Self {
        Self { start, end, stops: stops(colors, positions) }
    }

    /// Returns true when the gradient has a usable axis and at least one stop.
    ///
    /// Unusable gradients are painted flat with their first stop.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && !self.stops.is_empty()
            && (self.end - self.start).length_squared() > 0.0
    }
}

/// Radial gradient: t = distance from `center` / `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, colors: &[Color], positions: Option<&[f32]>) -> Self {
        Self { center, radius, stops: stops(colors, positions) }
    }

    /// Zero or negative radii draw nothing.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius > 0.0 && !self.stops.is_empty()
    }
}
