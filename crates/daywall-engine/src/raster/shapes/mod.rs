//! Fill primitives. Each shape module adds its `fill_*` method to `Raster`.
//!
//! Extending the raster:
//! - add a new shape module under `raster::shapes::*`
//! - implement the fill as horizontal runs fed to `Raster::shade_run`

pub(crate) mod circle;
pub(crate) mod polygon;
pub(crate) mod rect;
