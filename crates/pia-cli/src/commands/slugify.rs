use clap::Parser;
use pia_revisions::slugify;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, SimpleOutput};

#[derive(Debug, Parser)]
pub struct SlugifyCommand {
    /// Words of the phrase; joined with single spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}

impl SlugifyCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let slug = slugify(&self.text.join(" "));
        print_output(ctx, &SimpleOutput::new(slug))
    }
}
