//! Main entry point for the switchtube-dl CLI

use clap::Parser;
use switchtube_dl::cli::{Cli, Commands};
use tracing::error;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;
const EXIT_USER_ABORT: i32 = 130;

/// Initialize tracing subscriber with optional JSON formatting
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("switchtube_dl=warn"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Download(args) => args.execute().await,
        Commands::Token { command } => command.execute().await,
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(err) = result {
        // Ctrl-C in the selector and a declined token replacement are
        // expected outcomes, not crashes.
        if err.is_user_abort() {
            std::process::exit(EXIT_USER_ABORT);
        }

        if err.is_declined_replace() {
            return;
        }

        error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(EXIT_FAILURE);
    }
}
