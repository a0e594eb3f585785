// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the logger from the verbosity flag
// 3. Construct the scan request (this is where URL validation happens)
// 4. Run the single scan and print the result
// 5. Exit with proper code (0 = scan completed, 1 = invalid input)
//
// Rust concepts used:
// - async/await: The one network request runs on the tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to turn the outcome into an exit code
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analyzer;      // src/analyzer/ - the HTTP probe and status classifier
mod cli;           // src/cli.rs - command-line parsing
mod errors;        // src/errors.rs - the error taxonomy
mod report;        // src/report.rs - console output

// Import items we need from our modules
use analyzer::{ErrorCodeAnalyzer, ScanRequest};
use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use log::LevelFilter;
use pretty_env_logger::env_logger::Builder;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // The only error that escapes run() is invalid input:
            // everything that happens after validation is reported as data
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = scan completed, report printed (this covers request failures
//           too - those show up in the report, not in the exit code)
//   Err   = invalid input, printed with exit code 1
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Map the verbosity flag onto a log level and build the logger once,
    // here at the entry point. Nothing reconfigures logging after this.
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new().filter(None, log_level).init();

    // Construct the validated request; a bad URL prefix fails here,
    // before any network I/O happens
    let request = ScanRequest::new(cli.url, cli.user_agent, cli.timeout, cli.ignore_ssl)?;

    // One analyzer, one scan, one result
    let analyzer = ErrorCodeAnalyzer::new(request);
    let result = analyzer.scan().await;

    report::print_results(&result, cli.json)?;

    Ok(0)
}
