// src/analyzer/probe.rs
// =============================================================================
// This module performs the actual HTTP probe.
//
// Key functionality:
// - Validates the target URL shape before anything touches the network
// - Makes exactly one GET request with the configured user agent and timeout
// - Classifies the returned status code against the pattern table
// - Converts transport failures into a normal result instead of crashing
//
// Rust concepts:
// - async/await: For the network I/O
// - Result<T, E>: For error handling at the construction boundary
// - Ownership: The analyzer owns its request; nothing mutates it afterwards
// =============================================================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::Serialize;

use crate::analyzer::patterns;
use crate::errors::ScanError;

// Describes the one scan this process will perform
//
// Fields are private on purpose: the constructor is the only way to build a
// request, so a ScanRequest that exists has already passed URL validation.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    url: String,
    user_agent: String,
    timeout_seconds: u64,
    ignore_tls_errors: bool,
}

impl ScanRequest {
    // Builds a validated request
    //
    // The only validation is the scheme prefix - anything else (bad host,
    // bad port, weird path) is the HTTP client's problem to report.
    pub fn new(
        url: String,
        user_agent: String,
        timeout_seconds: u64,
        ignore_tls_errors: bool,
    ) -> Result<Self, ScanError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ScanError::InvalidUrl);
        }

        Ok(Self {
            url,
            user_agent,
            timeout_seconds,
            ignore_tls_errors,
        })
    }

    /// The target URL this request will probe
    pub fn url(&self) -> &str {
        &self.url
    }
}

// The result of one scan
//
// Produced exactly once per run and never mutated afterwards.
// #[derive(Serialize)] lets us emit it as JSON with --json.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// The URL that was scanned
    pub url: String,
    /// The status code the server answered with (None on transport failure)
    pub status_code: Option<u16>,
    /// The canned hint for the code, or the error text on failure
    pub description: String,
    /// Whether the status code matched the pattern table
    pub vulnerable: bool,
    /// The response headers, canonical Title-Case names
    pub response_headers: HashMap<String, String>,
}

// Runs the scan described by a ScanRequest
//
// Construct it once, call scan() once, print the result. That's the whole
// lifecycle - there is no pooling or reuse across runs.
pub struct ErrorCodeAnalyzer {
    request: ScanRequest,
}

impl ErrorCodeAnalyzer {
    pub fn new(request: ScanRequest) -> Self {
        Self { request }
    }

    // Performs the probe
    //
    // This function never fails: transport errors are folded into the
    // returned ScanResult (status_code None, description = error text) so
    // the caller can report them like any other outcome.
    pub async fn scan(&self) -> ScanResult {
        info!("Scanning URL: {}", self.request.url);

        let client = match self.build_client() {
            Ok(client) => client,
            Err(e) => {
                let error = ScanError::Unexpected(e.to_string());
                error!("{}", error);
                return self.error_result(&error);
            }
        };

        match client.get(&self.request.url).send().await {
            Ok(response) => self.analyze_response(response),
            Err(e) => {
                let error = ScanError::from(e);
                error!("{}", error);
                self.error_result(&error)
            }
        }
    }

    // Creates the HTTP client for this one request
    fn build_client(&self) -> Result<Client, reqwest::Error> {
        if self.request.ignore_tls_errors {
            debug!("TLS certificate verification is disabled for this scan");
        }

        Client::builder()
            .timeout(Duration::from_secs(self.request.timeout_seconds))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(self.request.user_agent.as_str())
            .danger_accept_invalid_certs(self.request.ignore_tls_errors)
            .build()
    }

    // Turns a response into a classified scan result
    //
    // The status code is never an error here: 4xx and 5xx responses are the
    // whole point of the tool, so they arrive as ordinary responses and go
    // through the classifier like everything else.
    fn analyze_response(&self, response: reqwest::Response) -> ScanResult {
        let status_code = response.status().as_u16();
        info!("Received status code: {}", status_code);

        let classification = patterns::classify(status_code);
        if classification.vulnerable {
            warn!(
                "Found error code: {} - {}",
                status_code, classification.description
            );
        } else {
            info!("No common error codes found.");
        }

        ScanResult {
            url: self.request.url().to_string(),
            status_code: Some(status_code),
            description: classification.description.to_string(),
            vulnerable: classification.vulnerable,
            response_headers: collect_headers(response.headers()),
        }
    }

    // Turns a failed probe into result data
    fn error_result(&self, error: &ScanError) -> ScanResult {
        ScanResult {
            url: self.request.url().to_string(),
            status_code: None,
            description: error.to_string(),
            vulnerable: false,
            response_headers: HashMap::new(),
        }
    }
}

// Copies the response headers into a plain map
//
// reqwest hands us lowercase names; the report prints the canonical form
// ("Server", "X-Powered-By"), so we convert here. When a header repeats,
// the last value wins.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                canonical_header_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

// Title-cases each dash-separated segment of a header name
// ("x-powered-by" -> "X-Powered-By")
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn request_for(url: &str, timeout_seconds: u64) -> ScanRequest {
        ScanRequest::new(
            url.to_string(),
            "vscan-error-code-analyzer/1.0".to_string(),
            timeout_seconds,
            false,
        )
        .unwrap()
    }

    // Binds a throwaway listener that answers one request with a canned
    // HTTP/1.1 response, and returns the URL pointing at it.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    #[test]
    fn request_accepts_http_and_https_urls() {
        assert!(ScanRequest::new(
            "http://example.com".to_string(),
            "agent".to_string(),
            10,
            false
        )
        .is_ok());
        assert!(ScanRequest::new(
            "https://example.com".to_string(),
            "agent".to_string(),
            10,
            false
        )
        .is_ok());
    }

    #[test]
    fn request_rejects_urls_without_a_scheme_prefix() {
        for url in ["example.com", "ftp://example.com", "", "htt://x", "HTTP://x"] {
            let result = ScanRequest::new(url.to_string(), "agent".to_string(), 10, false);
            assert!(
                matches!(result, Err(ScanError::InvalidUrl)),
                "url '{}' should be rejected",
                url
            );
        }
    }

    #[test]
    fn header_names_are_canonicalized() {
        assert_eq!(canonical_header_name("server"), "Server");
        assert_eq!(canonical_header_name("x-powered-by"), "X-Powered-By");
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
    }

    #[tokio::test]
    async fn scan_flags_a_403_and_keeps_the_headers() {
        let url = serve_once(
            "HTTP/1.1 403 Forbidden\r\nServer: nginx\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let analyzer = ErrorCodeAnalyzer::new(request_for(&url, 5));
        let result = analyzer.scan().await;

        assert_eq!(result.url, url);
        assert_eq!(result.status_code, Some(403));
        assert!(result.vulnerable);
        assert_eq!(
            result.description,
            "Forbidden. Potential directory listing vulnerability or access control misconfiguration."
        );
        assert_eq!(
            result.response_headers.get("Server").map(String::as_str),
            Some("nginx")
        );
    }

    #[tokio::test]
    async fn scan_reports_a_200_as_not_vulnerable() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nServer: nginx\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let analyzer = ErrorCodeAnalyzer::new(request_for(&url, 5));
        let result = analyzer.scan().await;

        assert_eq!(result.status_code, Some(200));
        assert!(!result.vulnerable);
        assert_eq!(
            result.description,
            "No known vulnerability associated with this status code."
        );
    }

    #[tokio::test]
    async fn scan_converts_a_timeout_into_result_data() {
        // A server that accepts the connection but never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let analyzer = ErrorCodeAnalyzer::new(request_for(&format!("http://{}", addr), 1));
        let result = analyzer.scan().await;

        assert_eq!(result.status_code, None);
        assert!(!result.vulnerable);
        assert!(
            result.description.starts_with("Request error:"),
            "description was '{}'",
            result.description
        );
        assert!(result.response_headers.is_empty());
    }

    #[tokio::test]
    async fn scan_converts_a_refused_connection_into_result_data() {
        // Bind a port, then drop the listener so connecting to it fails
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let analyzer = ErrorCodeAnalyzer::new(request_for(&format!("http://{}", addr), 2));
        let result = analyzer.scan().await;

        assert_eq!(result.status_code, None);
        assert!(!result.vulnerable);
        assert!(result.description.starts_with("Request error:"));
    }
}
