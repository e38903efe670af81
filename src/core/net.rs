// src/core/net.rs
//
// Blocking HTTP GET with a fixed user agent and timeout. No retries.

use std::time::Duration;

use reqwest::{StatusCode, Url, blocking::{Client, Response}};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Anything that can hand back the text of a page.
pub trait DocumentSource {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Transport { url: s!(), reason: e.to_string() })?;
        Ok(Self { client })
    }

    /// GET `url` with `query` appended. Non-2xx statuses become `FetchError::Status`.
    /// Errors name `url` without the query so credentials never leak into messages.
    pub fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, FetchError> {
        let full = Url::parse_with_params(url, query)
            .map_err(|e| FetchError::Transport { url: s!(url), reason: e.to_string() })?;

        logd!("GET {url}");
        let resp = self
            .client
            .get(full)
            .send()
            .map_err(|e| FetchError::Transport { url: s!(url), reason: transport_reason(e) })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp)
    }
}

impl DocumentSource for HttpClient {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        self.get(url, query)?
            .text()
            .map_err(|e| FetchError::Transport { url: s!(url), reason: transport_reason(e) })
    }
}

// reqwest's Display includes the full URL, query and all.
fn transport_reason(e: reqwest::Error) -> String {
    let e = e.without_url();
    if e.is_timeout() {
        s!("timed out")
    } else if e.is_connect() {
        s!("connection failed")
    } else if e.is_decode() || e.is_body() {
        s!("unreadable response body")
    } else {
        e.to_string()
    }
}

pub fn is_forbidden(err: &FetchError) -> bool {
    matches!(err, FetchError::Status { status, .. } if *status == StatusCode::FORBIDDEN.as_u16())
}
