// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands: the tool does one thing, so the whole interface
// is a positional URL plus a handful of flags.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "vscan",
    version = "0.1.0",
    about = "Scans an HTTP response for common error codes and potential vulnerabilities",
    long_about = "vscan requests a single URL and checks the returned status code against a \
                  small set of codes that tend to indicate security misconfigurations \
                  (missing access controls, exposed error pages, and so on)."
)]
pub struct Cli {
    /// The URL to scan (must start with http:// or https://)
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// The User-Agent string to use for the request
    #[arg(short, long, default_value = "vscan-error-code-analyzer/1.0")]
    pub user_agent: String,

    /// The request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Ignore SSL certificate verification errors
    #[arg(long)]
    pub ignore_ssl: bool,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the scan result as JSON instead of the plain-text report
    #[arg(long)]
    pub json: bool,
}
