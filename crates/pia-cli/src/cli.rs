//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use pia_common_config::{vars, ConfigLoader, Environment, PiaConfig};

use crate::commands::{ConfigCommand, RevisionsCommand, SlugifyCommand};
use crate::error::CliError;

/// pia - privacy impact assessment toolkit
///
/// Inspect revision timelines and configuration from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "pia",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = vars::PIA_CONFIG_PATH,
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group revisions under relative-date labels
    Revisions(RevisionsCommand),

    /// Turn a phrase into a catalog key
    Slugify(SlugifyCommand),

    /// Show the effective configuration
    Config(ConfigCommand),
}

impl Cli {
    fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new("."),
        }
    }

    /// Load the config file, then apply `PIA_*` overrides.
    pub fn load_config(&self) -> Result<(PiaConfig, PathBuf), CliError> {
        let loader = self.loader();
        let mut config = loader.load()?;
        Environment::apply_overrides(&mut config)?;
        Ok((config, loader.config_path().to_path_buf()))
    }

    /// Execute the selected command
    pub async fn execute(self, config: PiaConfig, config_path: PathBuf) -> Result<(), CliError> {
        let ctx = CommandContext {
            config,
            config_path,
            format: self.format,
            verbose: self.verbose,
        };

        match self.command {
            Command::Revisions(cmd) => cmd.execute(&ctx).await,
            Command::Slugify(cmd) => cmd.execute(&ctx),
            Command::Config(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: PiaConfig,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl CommandContext {
    pub fn new(config: PiaConfig) -> Self {
        Self {
            config,
            config_path: PathBuf::from(pia_common_config::CONFIG_FILE),
            format: OutputFormat::Text,
            verbose: 0,
        }
    }
}
