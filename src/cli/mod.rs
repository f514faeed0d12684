//! CLI module for the account service
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Job board account service - registration, sessions and profiles
#[derive(Parser)]
#[command(name = "jobboard-account-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
