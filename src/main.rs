use anyhow::Result;
use clap::Parser;

use rahi_cli::cli::commands::{chat, configure};
use rahi_cli::cli::{Args, Command};
use rahi_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Configure { endpoint, show }) => {
            configure::run_configure(configure::ConfigureOptions { endpoint, show })?;
        }
        None => {
            let options = chat::ChatOptions {
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
