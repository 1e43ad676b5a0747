//! Daywall front end.
//!
//! Wires the generator to the outside world: display size, theme, where the
//! image goes, and which seed was applied last. The [`worker::DailyWorker`]
//! runs the once-per-day flow; the `daywall` binary exposes it on the
//! command line.

pub mod cli;
pub mod config;
pub mod display;
pub mod sink;
pub mod store;
pub mod theme;
pub mod worker;

pub use config::WorkerConfig;
pub use worker::{DailyWorker, WorkOutcome};
