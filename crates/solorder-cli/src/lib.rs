//! CLI logic for the Solorder binaries.
//!
//! `solorder` reorders one file and `solorder-check` compares an exercise
//! tree against its solutions. Both share configuration loading, logger
//! setup and miette error rendering, which live here.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, CheckArgs};

use std::{io::Write, path::Path, process, str::FromStr};

use log::{LevelFilter, error, info, warn};

use solorder::{
    Reorderer, SolorderError,
    solutions::{self, SolutionReport},
};

use error_adapter::{render, to_reportable, to_reportables};

/// Run the reorderer on `args.input` and write the result to `out`.
///
/// Classifier warnings are rendered through miette and logged at warn
/// level; they do not fail the run.
///
/// # Errors
///
/// Returns `SolorderError` for:
/// - Configuration loading errors
/// - A missing or unreadable input file
/// - Failure to write the output
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), SolorderError> {
    info!(input_path = args.input; "Reordering file");

    let app_config = config::load_config(args.config.as_deref().map(Path::new), None)?;
    let reorderer = Reorderer::new(app_config);

    let source = reorderer.read_source(&args.input)?;
    let classification = reorderer.classify(&source);

    for reportable in to_reportables(classification.diagnostics(), &source) {
        warn!("{}", render(&reportable));
    }

    let output = reorderer.render(classification.document());
    writeln!(out, "{output}")?;

    info!(input_path = args.input; "File reordered");
    Ok(())
}

/// Check every exercise project under the root and write the report to `out`.
///
/// Mismatches are part of the report, not an error.
///
/// # Errors
///
/// Returns `SolorderError` for configuration errors, a missing project root,
/// or I/O failures while reading the tree.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<SolutionReport, SolorderError> {
    let app_config = config::load_config(
        args.config.as_deref().map(Path::new),
        args.root.as_deref().map(Path::new),
    )?;
    let root = app_config.compare().project_root();

    info!(root:? = root; "Checking solutions");
    let report = solutions::check_project_tree(root, app_config.compare())?;
    writeln!(out, "{report}")?;

    Ok(report)
}

/// Initialize `env_logger` with the given level filter.
///
/// An unknown level falls back to `warn` with a message on stderr.
pub fn init_logger(log_level: &str) {
    let level = LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {log_level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
}

/// Render a fatal error, log it and exit with status 1.
pub fn exit_with_error(err: &SolorderError) -> ! {
    error!("{}", render(&to_reportable(err)));
    process::exit(1);
}
