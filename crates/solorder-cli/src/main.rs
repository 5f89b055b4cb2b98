//! Solorder CLI entry point.

use std::io;

use clap::Parser;
use log::{debug, info};

use solorder_cli::Args;

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();
    solorder_cli::init_logger(&args.log_level);

    info!(log_level = args.log_level; "Starting Solorder");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = solorder_cli::run(&args, &mut io::stdout().lock()) {
        solorder_cli::exit_with_error(&err);
    }

    info!("Completed successfully");
}
