//! projscope CLI - locate and inspect a project's package.json

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use projscope::util::diagnostic::{emit, Diagnostic};
use projscope::util::GlobalContext;
use projscope::{ManifestError, ProjectError};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        report(&e, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("projscope=debug")
    } else {
        EnvFilter::new("projscope=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(cli.verbose);
    ctx.set_color(!cli.no_color);

    // Execute command
    match cli.command {
        Commands::Locate(args) => commands::locate::execute(args, &ctx),
        Commands::Show(args) => commands::show::execute(args, &ctx),
        Commands::Field(args) => commands::field::execute(args, &ctx),
        Commands::Entry(args) => commands::entry::execute(args, &ctx),
        Commands::Dist(args) => commands::dist::execute(args, &ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print an error, using the structured diagnostic when one is available.
fn report(err: &anyhow::Error, color: bool) {
    if let Some(e) = err.downcast_ref::<ManifestError>() {
        emit(&e.to_diagnostic(), color);
    } else if let Some(e) = err.downcast_ref::<ProjectError>() {
        emit(&e.to_diagnostic(), color);
    } else if let Some(diagnostic) = err.downcast_ref::<Diagnostic>() {
        emit(diagnostic, color);
    } else {
        eprintln!("error: {:#}", err);
    }
}
