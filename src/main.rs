use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::error::SessionError;
use connect_four::session::GameEngine;
use connect_four::ui::{ConsolePresenter, LineInput};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four on a 7x7 grid")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let presenter = ConsolePresenter::new(io::stdout(), &config.display);
    let mut engine = GameEngine::new(config.game, LineInput::stdin(), presenter)
        .context("invalid game configuration")?;

    match engine.run() {
        Ok(()) => Ok(()),
        // End of input is how a piped or closed console says goodbye
        Err(SessionError::InputClosed) => {
            log::info!("input closed, leaving");
            Ok(())
        }
        Err(err) => Err(err).context("game session failed"),
    }
}
