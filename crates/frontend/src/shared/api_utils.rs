//! Helpers for talking to the acquisitions backend.
//!
//! Paths always keep their trailing slash; the backend redirects otherwise
//! and the redirect drops PUT/PATCH bodies.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port the backend listens on when no explicit base is compiled in.
pub const BACKEND_PORT: u16 = 8000;

/// Backend origin, e.g. `http://localhost:8000`.
///
/// A compile-time `ACQ_API_BASE` wins; otherwise the page's own protocol and
/// host are reused with [`BACKEND_PORT`]. Empty when there is no window.
pub fn api_base() -> String {
    if let Some(base) = option_env!("ACQ_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fail on a non-2xx status without looking at the body.
pub fn ensure_ok(response: &gloo_net::http::Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_single_slash() {
        assert_eq!(
            join_url("http://localhost:8000/", "/acq/summary/pool/5/12/"),
            "http://localhost:8000/acq/summary/pool/5/12/"
        );
        assert_eq!(join_url("", "acq/sellers/"), "/acq/sellers/");
    }
}
