//! API utilities for talking to the hosted table API.
//!
//! Provides helper functions for constructing request URLs.

/// Get the base URL of the hosted table API.
///
/// The application is served behind the same origin as the table API
/// (reverse-proxied in every deployment), so the base is derived from
/// the current window location.
///
/// # Returns
/// - Base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build the URL of a named table under the REST root.
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::table_url;
/// let url = table_url("clients"); // "{origin}/rest/v1/clients"
/// ```
pub fn table_url(table: &str) -> String {
    format!("{}/rest/v1/{}", api_base(), table)
}
