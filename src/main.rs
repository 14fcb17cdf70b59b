//! iconlib - build draw.io icon libraries from SVG icon sets.

mod category;
mod cli;
mod config;
mod icon;
mod library;
mod logger;
mod manifest;
mod provider;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconlibConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IconlibConfig::load(&cli)?;
    debug_do! {
        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {}", path.display());
        }
    }

    match &cli.command {
        Commands::Build { .. } => cli::build::build_libraries(&config).map(|_| ()),
        Commands::Convert { args } => cli::convert::convert_folder(args, &config).map(|_| ()),
        Commands::Inspect { args } => cli::inspect::inspect_dir(args, &config).map(|_| ()),
    }
}
