use anyhow::Result;
use batchren_core::{BatchReport, Config, RenameError};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod batch;
mod cli;

use cli::Cli;

fn main() {
    // Set up signal handler for graceful shutdown (both SIGINT and SIGTERM)
    let interrupted = Arc::new(AtomicBool::new(false));

    // Handle SIGINT (Ctrl-C)
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\nReceived SIGINT. Finishing the current file...");
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Warning: failed to set SIGINT handler: {e}");
    }

    // Handle SIGTERM
    let interrupted_clone = Arc::clone(&interrupted);
    let registered = unsafe {
        signal_hook::low_level::register(signal_hook::consts::SIGTERM, move || {
            interrupted_clone.store(true, Ordering::SeqCst);
        })
    };
    if let Err(e) = registered {
        eprintln!("Warning: failed to set SIGTERM handler: {e}");
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring config: {e:#}");
        Config::default()
    });

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    let result = batch::handle_batch(&cli, &config, use_color, Arc::clone(&interrupted));
    process::exit(exit_code(&result));
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(result: &Result<BatchReport>) -> i32 {
    match result {
        Ok(report) if report.interrupted => {
            eprintln!("Operation interrupted, remaining files were left untouched");
            130
        },
        Ok(report) if report.has_failures() => 1,
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            match e.downcast_ref::<RenameError>() {
                Some(err) if err.is_user_error() => 2, // Invalid input
                _ => 3,                                // Internal error
            }
        },
    }
}
