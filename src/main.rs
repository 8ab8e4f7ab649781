//! CLI entry point for the random collage compositor

use clap::Parser;
use fugaco::io::cli::{Cli, CollageProcessor};
use fugaco::io::logging;
use fugaco::io::progress::ProgressManager;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let progress_manager = if cli.should_show_progress() {
        ProgressManager::new()
    } else {
        ProgressManager::hidden()
    };
    logging::init(cli.quiet, &progress_manager.multi_progress());

    let mut processor = CollageProcessor::with_progress(cli.to_config(), progress_manager);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("[x_x] {error}");
            ExitCode::FAILURE
        }
    }
}
