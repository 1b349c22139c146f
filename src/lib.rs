//! # MI CLI Library
//!
//! Core library functionality for the `mi` administration client.

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod models;
pub mod output;

use output::OutputFormat;

/// Command-line client for the Micro Integrator management API
///
/// Talks to the management REST API of one of several configured remote
/// servers, listing and inspecting deployed artifacts, changing log levels
/// and activating or deactivating artifacts.
#[derive(Parser)]
#[command(
    name = "mi",
    version,
    about = "Command-line client for the Micro Integrator management API",
    long_about = "Command-line client for the Micro Integrator management API.\n\nManage the remote servers the CLI talks to, log in to them, and inspect\nAPIs, proxy services, endpoints, sequences, tasks and other artifacts."
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Validate the server's TLS certificate instead of accepting any
    #[arg(long, global = true, env = "MI_CLI_TLS_VERIFY")]
    pub tls_verify: bool,

    /// Output format for command results
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown unless
/// `verbose` asks for this crate's debug output.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,mi_cli=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
