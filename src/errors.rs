// src/errors.rs
// =============================================================================
// This module defines the error type for the scanner.
//
// Error policy:
// - InvalidUrl is the only fatal error: it aborts the run with exit code 1
// - Network and Unexpected errors are recovered inside the scan and turned
//   into a normal scan result (status code None), so the process still
//   exits 0 and prints a report
//
// Rust concepts:
// - thiserror: Derive macro that implements std::error::Error + Display
// - #[from]: Automatic conversion from a source error type
// =============================================================================

use thiserror::Error;

// The error taxonomy of the scanner
//
// Each variant carries its user-facing message in the #[error(...)] attribute,
// so `err.to_string()` is exactly what gets printed or stored in a result.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The target URL does not carry a supported scheme prefix
    #[error("URL must start with http:// or https://")]
    InvalidUrl,

    /// The request failed at the transport level
    /// (DNS, connection refused, timeout, TLS handshake, ...)
    #[error("Request error: {0}")]
    Network(#[from] reqwest::Error),

    /// Anything else that went wrong while preparing or running the request
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
