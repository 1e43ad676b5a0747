//! `daywall` command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use daywall_gen::{PatternPack, Seed};

use crate::config::WorkerConfig;
use crate::display::FixedDisplay;
use crate::theme::ThemeSetting;

#[derive(Debug, Parser)]
#[command(name = "daywall", version, about = "Deterministic daily wallpaper generator")]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one wallpaper to a PNG file
    Generate {
        /// Seed to render; defaults to today's seed
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<Seed>,
        #[arg(long, default_value_t = 1080, allow_negative_numbers = true)]
        width: i64,
        #[arg(long, default_value_t = 2400, allow_negative_numbers = true)]
        height: i64,
        #[arg(long, value_enum, default_value = "system")]
        theme: ThemeArg,
        /// Pattern pack: `curated` or `procedural`
        #[arg(long, default_value = "curated")]
        pack: PatternPack,
        #[arg(long)]
        out: PathBuf,
    },
    /// Apply today's wallpaper unless it is already in place
    Daily {
        #[arg(long, default_value = "daywall-state.json")]
        state: PathBuf,
        #[arg(long, default_value = "daywall.png")]
        out: PathBuf,
        /// Re-apply even if today's seed was already applied
        #[arg(long)]
        force: bool,
        #[arg(long, default_value_t = 1080, allow_negative_numbers = true)]
        width: i64,
        #[arg(long, default_value_t = 2400, allow_negative_numbers = true)]
        height: i64,
        #[arg(long, value_enum, default_value = "system")]
        theme: ThemeArg,
        /// Pattern pack: `curated` or `procedural`
        #[arg(long, default_value = "curated")]
        pack: PatternPack,
        /// Turn the daily refresh off without removing the schedule
        #[arg(long)]
        disabled: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    System,
}

impl From<ThemeArg> for ThemeSetting {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => ThemeSetting::Dark,
            ThemeArg::Light => ThemeSetting::Light,
            ThemeArg::System => ThemeSetting::System,
        }
    }
}

impl Command {
    /// Worker settings for `daily`; `None` for other subcommands.
    pub fn worker_config(&self) -> Option<WorkerConfig> {
        match self {
            Command::Daily { state, out, force, width, height, theme, pack, disabled } => {
                Some(WorkerConfig {
                    display: FixedDisplay::new(*width, *height),
                    theme: (*theme).into(),
                    pack: *pack,
                    state_path: state.clone(),
                    output_path: out.clone(),
                    enabled: !disabled,
                    force: *force,
                })
            }
            Command::Generate { .. } => None,
        }
    }
}
