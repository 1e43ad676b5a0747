//! Patterns whose colors are sampled from HSV ranges per theme.

pub(super) mod mesh;
pub(super) mod multi_gradient;
pub(super) mod rings;
pub(super) mod shapes;
pub(super) mod stripes;
