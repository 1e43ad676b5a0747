//! Daywall engine crate.
//!
//! This crate owns the drawing pieces used by the generator: geometry, the
//! paint model and an in-memory RGBA raster with source-over fill primitives.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;

pub use raster::Raster;
