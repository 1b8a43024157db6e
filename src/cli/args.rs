use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rahi")]
#[command(about = "Terminal client for the alt.f assistant")]
#[command(version)]
pub struct Args {
    /// Chat API origin (e.g., http://localhost:5000)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or update stored configuration
    Configure {
        /// Set the chat API origin
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
