//! VARIoT CLI
//!
//! Look up a single vulnerability or exploit and print it as JSON.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use variot_client::cli::{failure_message, Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the JSON record only
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}
