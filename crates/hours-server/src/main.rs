//! `washroom-hours` - serve washroom opening hours over HTTP

#![deny(unsafe_code)]

use clap::Parser;

use hours_server::cli::{Cli, Command};
use hours_server::{init_logging, serve, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Serve(args) => {
            args.apply(&mut config);
            config.validate()?;
            serve(config).await?;
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
