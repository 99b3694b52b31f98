// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

//! antkeeper - trigger a registered workflow from the command line.

mod args;
mod commands;
mod exit_error;
mod registrations;

use clap::{Parser, Subcommand};
use commands::run;

#[derive(Parser)]
#[command(name = "antkeeper", version, about = "Trigger an Antkeeper workflow")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a registered workflow to completion.
    Run(run::RunArgs),
}

fn main() {
    setup_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => run::run(args),
    };

    if let Err(err) = result {
        let code = err
            .downcast_ref::<exit_error::ExitError>()
            .map_or(2, |e| e.code);
        let message = err.to_string();
        if !message.is_empty() {
            eprintln!("Error: {message}");
        }
        std::process::exit(code);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
