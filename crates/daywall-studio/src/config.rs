use std::path::PathBuf;

use daywall_gen::PatternPack;

use crate::display::FixedDisplay;
use crate::theme::ThemeSetting;

/// Settings for one run of the daily worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub display: FixedDisplay,
    pub theme: ThemeSetting,
    pub pack: PatternPack,
    /// JSON file remembering the last applied seed.
    pub state_path: PathBuf,
    /// Where the PNG is written.
    pub output_path: PathBuf,
    /// When false the worker does nothing and reports `Skipped`.
    pub enabled: bool,
    /// Apply even when today's seed was already applied.
    pub force: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            display: FixedDisplay::default(),
            theme: ThemeSetting::default(),
            pack: PatternPack::default(),
            state_path: PathBuf::from("daywall-state.json"),
            output_path: PathBuf::from("daywall.png"),
            enabled: true,
            force: false,
        }
    }
}
