// src/analyzer/patterns.rs
// =============================================================================
// The static lookup table that drives classification.
//
// Seven status codes are considered "interesting" from a reconnaissance
// standpoint; each maps to a canned hint about what the code might mean on
// the target. Everything else gets a generic non-finding description.
// =============================================================================

// HTTP status codes worth a second look, with their recon hints
//
// A const array (not a HashMap) because the set is tiny and fixed for the
// lifetime of the program - a linear scan over seven entries is the lookup.
pub const ERROR_PATTERNS: [(u16, &str); 7] = [
    (400, "Possible input validation issues. Check for malformed requests."),
    (401, "Authentication required. Investigate authentication mechanisms and bypasses."),
    (403, "Forbidden. Potential directory listing vulnerability or access control misconfiguration."),
    (404, "Not Found. Check for information disclosure or path traversal vulnerabilities."),
    (405, "Method Not Allowed. Investigate allowed methods and potential for exploitation."),
    (500, "Internal Server Error. Check server logs for details. Potential for remote code execution or information disclosure."),
    (503, "Service Unavailable. Check for denial-of-service vulnerabilities."),
];

/// Description used for every status code outside the table
pub const NO_KNOWN_VULNERABILITY: &str =
    "No known vulnerability associated with this status code.";

// The outcome of classifying one status code
//
// 'vulnerable' here means "matches the table above" - it flags a lead worth
// investigating, not a verified security finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub vulnerable: bool,
    pub description: &'static str,
}

// Classifies a status code against the table
//
// Pure function: one lookup, no side effects.
pub fn classify(status_code: u16) -> Classification {
    match ERROR_PATTERNS
        .iter()
        .find(|(code, _)| *code == status_code)
    {
        Some(&(_, description)) => Classification {
            vulnerable: true,
            description,
        },
        None => Classification {
            vulnerable: false,
            description: NO_KNOWN_VULNERABILITY,
        },
    }
}
