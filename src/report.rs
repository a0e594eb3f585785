// src/report.rs
// =============================================================================
// This module turns a scan result into console output.
//
// The plain-text report is a fixed format:
//
//   URL: https://example.com
//   Status Code: 403
//   Description: Forbidden. ...
//   Vulnerable: True
//   Response Headers:
//     Server: nginx
//
// "Status Code: None" marks a scan that never got a response, and the
// vulnerable flag prints capitalized (True/False). With --json the result
// is serialized instead of formatted.
// =============================================================================

use anyhow::Result;

use crate::analyzer::ScanResult;

// Prints the scan result either as the plain report or as JSON
pub fn print_results(result: &ScanResult, json: bool) -> Result<()> {
    if json {
        // Serialize the result to JSON and print
        let json_output = serde_json::to_string_pretty(result)?;
        println!("{}", json_output);
    } else {
        println!("{}", render(result));
    }
    Ok(())
}

// Builds the plain-text report
//
// Kept separate from the printing so the exact line format can be tested.
// Header lines come out in whatever order the map yields them.
pub fn render(result: &ScanResult) -> String {
    let mut lines = Vec::new();

    lines.push(format!("URL: {}", result.url));
    lines.push(match result.status_code {
        Some(code) => format!("Status Code: {}", code),
        None => "Status Code: None".to_string(),
    });
    lines.push(format!("Description: {}", result.description));
    lines.push(format!(
        "Vulnerable: {}",
        if result.vulnerable { "True" } else { "False" }
    ));
    lines.push("Response Headers:".to_string());
    for (name, value) in &result.response_headers {
        lines.push(format!("  {}: {}", name, value));
    }

    lines.join("\n")
}
