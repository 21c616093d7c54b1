// crates/vk-enumgen/src/cli.rs

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use vk_registry::{BitposStyle, DEFAULT_API, DEFAULT_ENUM_NAMES, EnumSelection};

#[derive(Parser, Debug)]
#[command(
    name = "vk-enumgen",
    version,
    about = "Print Vulkan registry enums as { \"NAME\", value } literals"
)]
pub struct Cli {
    /// Enum groups to print (defaults to the formats, stages and pipeline enums)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Path to the registry
    #[arg(short, long, value_name = "PATH", default_value = "vk.xml")]
    pub input: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// API used to filter api/supported attributes
    #[arg(long, value_name = "NAME", default_value = DEFAULT_API)]
    pub api: String,

    /// Include values added by core versions and extensions
    #[arg(long)]
    pub extensions: bool,

    /// Include alias constants, printed with their target's value
    #[arg(long)]
    pub aliases: bool,

    /// Print bit positions as hex masks
    #[arg(long)]
    pub bit_masks: bool,

    /// List every enum group in the registry and exit
    #[arg(long, conflicts_with = "names")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn selection(&self) -> EnumSelection {
        let mut selection = if self.names.is_empty() {
            EnumSelection::with_names(DEFAULT_ENUM_NAMES)
        } else {
            EnumSelection::with_names(&self.names)
        };
        selection.api = self.api.clone();
        selection.include_extensions = self.extensions;
        selection.include_aliases = self.aliases;
        selection
    }

    pub fn bitpos_style(&self) -> BitposStyle {
        if self.bit_masks {
            BitposStyle::Mask
        } else {
            BitposStyle::Position
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
