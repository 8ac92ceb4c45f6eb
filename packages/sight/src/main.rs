//! Main entry point for the hash-sight CLI

use clap::Parser;
use hash_sight::Cli;
use sight_common::LoggingTransformer;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize structured logging
    LoggingTransformer::init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    match hash_sight::run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            LoggingTransformer::log_failure(e.kind(), &e);
            eprintln!("hash-sight: {e}");
            ExitCode::FAILURE
        }
    }
}
