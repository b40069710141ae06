//! Entry point for the `pia` binary.

use std::process::ExitCode;

use clap::Parser;
use pia_cli::cli::Cli;
use pia_cli::CliError;
use pia_common_config::{vars, Environment};
use pia_common_log::{LogConfig, LogLevel};
use tracing::debug;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    // .env files may set PIA_CONFIG_PATH, which clap reads
    if let Err(e) = Environment::init() {
        eprintln!("warning: {e}");
    }

    let cli = Cli::parse();
    init_tracing(&cli);

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return Exit::GeneralError.into();
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            debug!(code = e.code(), "command failed");
            eprintln!("error[{}]: {e}", e.code());
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let (config, config_path) = cli.load_config()?;
    cli.execute(config, config_path).await
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet || Environment::get(vars::PIA_LOG_LEVEL).is_none() {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = pia_common_log::init(config) {
        eprintln!("warning: logging disabled: {e}");
    }
}
