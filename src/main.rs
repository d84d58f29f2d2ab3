use clap::Parser;
use galeria::{
    cli::commands::{browse::BrowseCommand, fetch::FetchCommand, CommandHandler},
    cli::{Cli, Commands},
    Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set; the TUI owns the terminal.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse { endpoint, per_page } => {
            let command = BrowseCommand::new(endpoint, per_page);
            command.execute()?;
        }
        Commands::Fetch {
            endpoint,
            per_page,
            format,
        } => {
            let command = FetchCommand::new(endpoint, per_page, format);
            command.execute()?;
        }
    }

    Ok(())
}
