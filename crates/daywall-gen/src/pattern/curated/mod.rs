//! Patterns drawing from the fixed theme palettes.

pub(super) mod aurora;
pub(super) mod flow;
pub(super) mod glow;
pub(super) mod layered;
pub(super) mod orbs;
