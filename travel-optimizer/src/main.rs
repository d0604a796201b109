use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use travel_optimizer::cli::{Cli, run};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
