//! # TinyChirp
//!
//! A tiny single-user social feed that lives in your terminal.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - The file-backed store
//! - Command dispatch

use anyhow::Result;
use clap::Parser;

use tinychirp::config::Settings;
use tinychirp::presentation::cli::Cli;
use tinychirp::presentation::commands;
use tinychirp::startup::Application;

fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    tinychirp::telemetry::init_tracing();

    let cli = Cli::parse();

    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Build the application around the configured data directory
    let mut app = Application::build(&settings, cli.data_dir)?;

    commands::run(cli.command, &mut app)
}
