//
//  gqlx
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gqlx::cli::{Cli, Commands, UsageError};
use gqlx::exit_codes;
use gqlx::output::OutputWriter;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();
    let writer = OutputWriter::default().plain(cli.global.no_color);

    // Execute command
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) if e.downcast_ref::<UsageError>().is_some() => {
            writer.write_error(&format!("{e:#}"));
            exit_codes::USAGE
        }
        Err(e) => {
            writer.write_error(&format!("{e:#}"));
            exit_codes::ERROR
        }
    };

    std::process::exit(code);
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("GQLX_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Query(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => {
            cmd.run()?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::Version => {
            println!("{} version {}", gqlx::APP_NAME, gqlx::VERSION);
            Ok(exit_codes::SUCCESS)
        }
    }
}
