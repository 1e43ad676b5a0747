//! Once-per-day wallpaper refresh.
//!
//! ```text
//! disabled                  -> Skipped
//! today's seed == stored    -> Skipped   (unless forced)
//! generate + apply ok       -> store seed, Applied(seed)
//! anything fails            -> Retry     (stored seed untouched)
//! ```

use anyhow::{Context, Result};
use daywall_gen::seed::{Clock, SystemClock, date_for_seed, seed_from_clock};
use daywall_gen::{Generator, GeneratorConfig, Seed};

use crate::config::WorkerConfig;
use crate::display::DisplaySize;
use crate::sink::{PngSink, WallpaperSink};
use crate::store::SeedStore;
use crate::theme::ThemeResolver;

/// Exit status asking the scheduler to try again later (`EX_TEMPFAIL`).
pub const EX_TEMPFAIL: u8 = 75;

/// Result of one worker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// Nothing to do.
    Skipped,
    /// A new wallpaper was applied and its seed stored.
    Applied(Seed),
    /// Something failed; run again later.
    Retry,
}

impl WorkOutcome {
    /// Process exit code for this outcome.
    #[inline]
    pub const fn exit_code(self) -> u8 {
        match self {
            WorkOutcome::Skipped | WorkOutcome::Applied(_) => 0,
            WorkOutcome::Retry => EX_TEMPFAIL,
        }
    }
}

pub struct DailyWorker {
    generator: Generator,
    clock: Box<dyn Clock>,
    display: Box<dyn DisplaySize>,
    theme: Box<dyn ThemeResolver>,
    sink: Box<dyn WallpaperSink>,
    store: SeedStore,
    enabled: bool,
    force: bool,
}

impl DailyWorker {
    /// Worker wired to the system clock, the environment theme and a PNG file.
    pub fn new(config: &WorkerConfig) -> Self {
        Self {
            generator: Generator::new(GeneratorConfig { pack: config.pack }),
            clock: Box::new(SystemClock),
            display: Box::new(config.display),
            theme: Box::new(config.theme),
            sink: Box::new(PngSink::new(&config.output_path)),
            store: SeedStore::new(&config.state_path),
            enabled: config.enabled,
            force: config.force,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_display(mut self, display: impl DisplaySize + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    pub fn with_theme(mut self, theme: impl ThemeResolver + 'static) -> Self {
        self.theme = Box::new(theme);
        self
    }

    pub fn with_sink(mut self, sink: impl WallpaperSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn run(&self) -> WorkOutcome {
        if !self.enabled {
            log::info!("daily wallpaper disabled; skipping");
            return WorkOutcome::Skipped;
        }

        let seed = seed_from_clock(self.clock.as_ref());
        if !self.force && self.store.load() == Some(seed) {
            log::info!("wallpaper for seed {seed} already applied; skipping");
            return WorkOutcome::Skipped;
        }

        match self.apply(seed) {
            Ok(()) => {
                log::info!("applied wallpaper for seed {seed}");
                WorkOutcome::Applied(seed)
            }
            Err(e) => {
                log::warn!("daily wallpaper failed, will retry: {e:#}");
                WorkOutcome::Retry
            }
        }
    }

    fn apply(&self, seed: Seed) -> Result<()> {
        let (width, height) = self.display.size();
        let is_dark = self.theme.is_dark();
        if let Some(date) = date_for_seed(seed) {
            log::debug!("generating {width}x{height} for {date} (dark: {is_dark})");
        }

        let (kind, raster) = self
            .generator
            .generate_with_kind(width, height, is_dark, seed)
            .context("failed to generate wallpaper")?;
        log::debug!("seed {seed} rendered as {kind}");

        self.sink.apply(&raster).context("failed to apply wallpaper")?;
        // Only remember the seed once the wallpaper is really in place.
        self.store.save(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(WorkOutcome::Skipped.exit_code(), 0);
        assert_eq!(WorkOutcome::Applied(1).exit_code(), 0);
        assert_eq!(WorkOutcome::Retry.exit_code(), 75);
    }
}
