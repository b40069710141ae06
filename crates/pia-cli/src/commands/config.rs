use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput, SimpleOutput};

#[derive(Debug, Parser)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the path of the configuration file
    Path,
}

#[derive(Serialize)]
#[serde(transparent)]
struct ConfigOutput<'a>(&'a pia_common_config::PiaConfig);

impl FormattedOutput for ConfigOutput<'_> {
    fn format_text(&self) -> String {
        match serde_yaml::to_string(self.0) {
            Ok(yaml) => yaml.trim_end().to_string(),
            Err(e) => format!("# failed to render configuration: {e}"),
        }
    }
}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        match self.action {
            ConfigAction::Show => print_output(ctx, &ConfigOutput(&ctx.config)),
            ConfigAction::Path => {
                let path = ctx.config_path.display().to_string();
                print_output(ctx, &SimpleOutput::new(path))
            }
        }
    }
}
