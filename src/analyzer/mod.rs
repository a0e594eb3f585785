// src/analyzer/mod.rs
// =============================================================================
// This module contains the scan logic.
//
// Submodules:
// - probe: Makes the HTTP request and assembles the scan result
// - patterns: The static status-code lookup table and classifier
//
// This file (mod.rs) is the module root - it re-exports the public API so
// the rest of the application can write `analyzer::ErrorCodeAnalyzer`
// instead of reaching into submodules.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod patterns;
mod probe;

// Re-export public items from submodules
pub use patterns::{classify, Classification, ERROR_PATTERNS, NO_KNOWN_VULNERABILITY};
pub use probe::{ErrorCodeAnalyzer, ScanRequest, ScanResult};
