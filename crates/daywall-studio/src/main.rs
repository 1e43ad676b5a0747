use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use daywall_engine::logging::{LoggingConfig, init_logging};
use daywall_gen::seed::{date_for_seed, today_seed};
use daywall_gen::{Generator, GeneratorConfig};
use daywall_studio::DailyWorker;
use daywall_studio::cli::{Cli, Command};
use daywall_studio::sink::{PngSink, WallpaperSink};
use daywall_studio::theme::{ThemeResolver, ThemeSetting};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    match run(&cli.command) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<ExitCode> {
    if let Some(config) = command.worker_config() {
        let outcome = DailyWorker::new(&config).run();
        return Ok(ExitCode::from(outcome.exit_code()));
    }

    let Command::Generate { seed, width, height, theme, pack, out } = command else {
        return Ok(ExitCode::SUCCESS);
    };

    let seed = seed.unwrap_or_else(today_seed);
    let is_dark = ThemeSetting::from(*theme).is_dark();
    let generator = Generator::new(GeneratorConfig { pack: *pack });
    let (kind, raster) = generator.generate_with_kind(*width, *height, is_dark, seed)?;

    match date_for_seed(seed) {
        Some(date) => log::info!("seed {seed} ({date}): {kind}"),
        None => log::info!("seed {seed}: {kind}"),
    }
    PngSink::new(out).apply(&raster)?;
    Ok(ExitCode::SUCCESS)
}
