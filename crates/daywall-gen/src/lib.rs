//! Daywall generator crate.
//!
//! Turns `(width, height, is_dark, seed)` into a finished [`Raster`]. The seed
//! drives a single [`RandomStream`] that makes every decision in program
//! order, so the same inputs always produce the same bytes.
//!
//! [`Raster`]: daywall_engine::Raster

pub mod generator;
pub mod palette;
pub mod pattern;
pub mod rng;
pub mod seed;

pub use generator::{GenerateError, Generator, GeneratorConfig, generate};
pub use pattern::{PatternKind, PatternPack};
pub use rng::RandomStream;
pub use seed::{Seed, today_seed};
