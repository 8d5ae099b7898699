//! Art Helper terminal front-end.
//!
//! Asks for an art medium, requests materials advice from the configured
//! chat-completion endpoint (or a canned reply with `--mock`) and prints the
//! result between the usual banners.

mod app;
mod args;
mod menu;

use std::io;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use args::Args;
use art_helper_core::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the interactive stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = app::run(args.mock, &config, &mut input, &mut output).await {
        eprintln!("ERROR: {}", e);
        exit(1);
    }
}
