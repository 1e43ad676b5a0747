//! Pattern library.
//!
//! A pattern is a self-contained drawing routine over
//! `(raster, stream, ctx)`. Patterns only write through the raster's fill
//! primitives and never read pixels back.
//!
//! Patterns come in closed packs. A generator runs exactly one pack:
//! - [`PatternPack::Curated`]: fixed palette tables sampled with `pick`
//! - [`PatternPack::Procedural`]: colors sampled from HSV ranges
//!
//! Adding a pattern:
//! - add a module under the pack directory with a `draw` function
//! - add a `PatternKind` variant and list it in the pack's table
//! - route it in [`PatternKind::draw`]

mod curated;
mod procedural;

use std::fmt;
use std::str::FromStr;

use daywall_engine::Raster;
use daywall_engine::coords::{Rect, Vec2};
use daywall_engine::paint::Color;
use thiserror::Error;

use crate::palette::{self, Palette};
use crate::rng::RandomStream;

/// A closed set of patterns plus the color strategy they share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PatternPack {
    #[default]
    Curated,
    Procedural,
}

const CURATED: [PatternKind; 5] = [
    PatternKind::LayeredLinearGradients,
    PatternKind::RadialOrbs,
    PatternKind::DiagonalFlow,
    PatternKind::AuroraWaves,
    PatternKind::MeshGlow,
];

const PROCEDURAL: [PatternKind; 5] = [
    PatternKind::MultiGradient,
    PatternKind::ConcentricCircles,
    PatternKind::DiagonalStripes,
    PatternKind::MeshGradient,
    PatternKind::GeometricShapes,
];

impl PatternPack {
    pub const ALL: [PatternPack; 2] = [PatternPack::Curated, PatternPack::Procedural];

    /// Patterns in selection order; the position is the pattern index.
    #[inline]
    pub const fn patterns(self) -> &'static [PatternKind] {
        match self {
            PatternPack::Curated => &CURATED,
            PatternPack::Procedural => &PROCEDURAL,
        }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.patterns().len()
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PatternPack::Curated => "curated",
            PatternPack::Procedural => "procedural",
        }
    }
}

impl fmt::Display for PatternPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a pack name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern pack `{0}` (expected `curated` or `procedural`)")]
pub struct UnknownPack(pub String);

impl FromStr for PatternPack {
    type Err = UnknownPack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternPack::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPack(s.to_string()))
    }
}

/// Every pattern routine, across all packs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    LayeredLinearGradients,
    RadialOrbs,
    DiagonalFlow,
    AuroraWaves,
    MeshGlow,
    MultiGradient,
    ConcentricCircles,
    DiagonalStripes,
    MeshGradient,
    GeometricShapes,
}

impl PatternKind {
    pub const fn pack(self) -> PatternPack {
        match self {
            PatternKind::LayeredLinearGradients
            | PatternKind::RadialOrbs
            | PatternKind::DiagonalFlow
            | PatternKind::AuroraWaves
            | PatternKind::MeshGlow => PatternPack::Curated,
            PatternKind::MultiGradient
            | PatternKind::ConcentricCircles
            | PatternKind::DiagonalStripes
            | PatternKind::MeshGradient
            | PatternKind::GeometricShapes => PatternPack::Procedural,
        }
    }

    /// Index of this pattern inside its pack.
    pub fn index(self) -> usize {
        self.pack()
            .patterns()
            .iter()
            .position(|&k| k == self)
            .unwrap_or_default()
    }

    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::LayeredLinearGradients => "layered-linear-gradients",
            PatternKind::RadialOrbs => "radial-orbs",
            PatternKind::DiagonalFlow => "diagonal-flow",
            PatternKind::AuroraWaves => "aurora-waves",
            PatternKind::MeshGlow => "mesh-glow",
            PatternKind::MultiGradient => "multi-gradient",
            PatternKind::ConcentricCircles => "concentric-circles",
            PatternKind::DiagonalStripes => "diagonal-stripes",
            PatternKind::MeshGradient => "mesh-gradient",
            PatternKind::GeometricShapes => "geometric-shapes",
        }
    }

    /// Runs the pattern routine.
    pub fn draw(self, raster: &mut Raster, stream: &mut RandomStream, ctx: &PatternCtx) {
        match self {
            PatternKind::LayeredLinearGradients => curated::layered::draw(raster, stream, ctx),
            PatternKind::RadialOrbs => curated::orbs::draw(raster, stream, ctx),
            PatternKind::DiagonalFlow => curated::flow::draw(raster, stream, ctx),
            PatternKind::AuroraWaves => curated::aurora::draw(raster, stream, ctx),
            PatternKind::MeshGlow => curated::glow::draw(raster, stream, ctx),
            PatternKind::MultiGradient => procedural::multi_gradient::draw(raster, stream, ctx),
            PatternKind::ConcentricCircles => procedural::rings::draw(raster, stream, ctx),
            PatternKind::DiagonalStripes => procedural::stripes::draw(raster, stream, ctx),
            PatternKind::MeshGradient => procedural::mesh::draw(raster, stream, ctx),
            PatternKind::GeometricShapes => procedural::shapes::draw(raster, stream, ctx),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chooses one pattern of `pack` with a single `next_int(pack.len())` draw.
pub fn select_pattern(pack: PatternPack, stream: &mut RandomStream) -> PatternKind {
    let patterns = pack.patterns();
    let idx = stream.next_int(patterns.len() as u32) as usize;
    patterns[idx]
}

/// Everything a pattern may read besides the random stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternCtx {
    pub width: f32,
    pub height: f32,
    pub is_dark: bool,
    pub palette: Palette,
    pub background: Color,
}

impl PatternCtx {
    pub fn new(width: u32, height: u32, is_dark: bool) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            is_dark,
            palette: Palette::for_theme(is_dark),
            background: palette::background(is_dark),
        }
    }

    #[inline]
    pub fn canvas(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.canvas().center()
    }

    #[inline]
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn max_dim(&self) -> f32 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        Vec2::new(self.width, self.height).length()
    }

    /// Endpoints of a segment of half-length `half` through the canvas centre.
    pub fn axis_through_center(&self, angle: f32, half: f32) -> (Vec2, Vec2) {
        let c = self.center();
        let d = Vec2::from_angle(angle) * half;
        (c - d, c + d)
    }

    /// `n` distinct colors from the theme palette.
    #[inline]
    pub fn pick_colors(&self, n: usize, stream: &mut RandomStream) -> Vec<Color> {
        palette::pick(&self.palette, n, stream)
    }

    /// One color from the theme palette.
    #[inline]
    pub fn pick_color(&self, stream: &mut RandomStream) -> Color {
        self.pick_colors(1, stream).first().copied().unwrap_or(self.background)
    }

    /// Uniform point inside the canvas.
    #[inline]
    pub fn random_point(&self, stream: &mut RandomStream) -> Vec2 {
        let x = stream.next_float() * self.width;
        let y = stream.next_float() * self.height;
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn packs_have_five_patterns() {
        for pack in PatternPack::ALL {
            assert_eq!(pack.len(), 5);
            for (i, k) in pack.patterns().iter().enumerate() {
                assert_eq!(k.pack(), pack);
                assert_eq!(k.index(), i);
            }
        }
    }

    #[test]
    fn pack_parsing() {
        assert_eq!("curated".parse::<PatternPack>(), Ok(PatternPack::Curated));
        assert_eq!(" Procedural ".parse::<PatternPack>(), Ok(PatternPack::Procedural));
        assert!("fractal".parse::<PatternPack>().is_err());
        assert_eq!(PatternPack::default(), PatternPack::Curated);
    }

    #[test]
    fn selection_covers_every_index() {
        for pack in PatternPack::ALL {
            let mut hits: HashMap<usize, usize> = HashMap::new();
            for seed in 0..2000 {
                let kind = select_pattern(pack, &mut RandomStream::new(seed));
                *hits.entry(kind.index()).or_default() += 1;
            }
            assert_eq!(hits.len(), pack.len());
            // Uniform would be 400 each; allow generous slack.
            assert!(hits.values().all(|&n| n > 250), "{pack}: {hits:?}");
        }
    }

    #[test]
    fn selection_uses_one_draw() {
        let mut a = RandomStream::new(17);
        let mut b = RandomStream::new(17);
        select_pattern(PatternPack::Curated, &mut a);
        b.next_int(5);
        assert_eq!(a.next_int(1_000_000), b.next_int(1_000_000));
    }

    #[test]
    fn ctx_geometry() {
        let ctx = PatternCtx::new(30, 40, true);
        assert_eq!(ctx.min_dim(), 30.0);
        assert_eq!(ctx.max_dim(), 40.0);
        assert_eq!(ctx.diagonal(), 50.0);
        let (a, b) = ctx.axis_through_center(0.0, 10.0);
        assert_eq!(a, Vec2::new(5.0, 20.0));
        assert_eq!(b, Vec2::new(25.0, 20.0));
        assert_eq!(ctx.palette, Palette::DARK);
    }
}
