//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::category::LayoutKind;

/// Build draw.io icon libraries from SVG icon sets
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: iconlib.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "iconlib.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build libraries for every configured provider
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Convert one folder of icons into a single library file
    #[command(visible_alias = "c")]
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print the categories a directory would produce
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory (library files and index.json)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Cache directory for extracted archives
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub cache: Option<PathBuf>,

    /// Largest side of an icon in the library, in px
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: Option<u32>,

    /// Remove the cache directory after the run
    #[arg(short, long)]
    pub clean: bool,

    /// Only build the provider with this id (repeatable)
    #[arg(short, long = "provider", value_name = "ID")]
    pub provider: Vec<String>,
}

/// Convert command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Folder holding the icons (not searched recursively)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub folder: PathBuf,

    /// Library file to write
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Largest side of an icon in the library, in px
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: Option<u32>,
}

/// Inspect command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Directory to inspect
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// How to split the directory into categories
    #[arg(short, long, value_enum, default_value_t = LayoutKind::Inferred)]
    pub layout: LayoutKind,

    /// Directory name to look for with `--layout subdirs`
    #[arg(short, long)]
    pub root_name: Option<String>,

    /// List every icon under its category
    #[arg(short, long)]
    pub files: bool,
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
