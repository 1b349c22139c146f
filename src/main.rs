//! # MI CLI
//!
//! A command-line administration client for the Micro Integrator management API.
//!
//! The `mi` binary keeps a small list of remote servers in
//! `~/.wso2mi/mi_cli_config.yaml`, logs in to the current one and queries its
//! REST management API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the CLI at a server and make it current
//! mi remote add staging 192.168.1.15 9164
//! mi remote select staging
//!
//! # Obtain an access token
//! mi remote login
//!
//! # Inspect deployed artifacts
//! mi show api
//! mi show api HealthcareAPI
//! ```

use clap::Parser;
use mi_cli::{commands, init_tracing, Cli};
use std::process::ExitCode;

/// Main entry point for the MI CLI
///
/// Parses command-line arguments and delegates to the appropriate command handler.
/// Any error is printed once to stderr and turns into exit code 1.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(cmd) = cli.cmd else {
        eprintln!("No command provided. Use --help to see available commands.");
        return ExitCode::FAILURE;
    };
    let opts = commands::GlobalOpts {
        verify_tls: cli.tls_verify,
        output: cli.output,
    };
    match commands::run(cmd, opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
