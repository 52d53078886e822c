use anyhow::Result;
use clap::Parser;

use passage_quiz::cli::Cli;
use passage_quiz::{logging, payload, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    log::info!("starting, logging to {}", log_path.display());

    let payload = payload::load_payload(cli.payload.as_deref())?;

    tui::run_tui(payload, &cli)
}
