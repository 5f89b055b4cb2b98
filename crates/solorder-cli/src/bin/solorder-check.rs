//! Exercise/solution checker entry point.

use std::io;

use clap::Parser;
use log::{debug, info};

use solorder_cli::CheckArgs;

fn main() {
    miette::set_panic_hook();

    let args = CheckArgs::parse();
    solorder_cli::init_logger(&args.log_level);

    info!(log_level = args.log_level; "Starting Solorder check");
    debug!(args:?; "Parsed arguments");

    match solorder_cli::run_check(&args, &mut io::stdout().lock()) {
        Ok(report) => info!(mismatches = report.mismatches().len(); "Check finished"),
        Err(err) => solorder_cli::exit_with_error(&err),
    }
}
