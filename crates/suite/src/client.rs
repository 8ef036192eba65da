// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Blocking HTTP client bound to the backend under test.
//!
//! All test cases issue synchronous requests in sequence; there is no
//! overlap and no shared state beyond the remote backend itself.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client with a base URL and an optional bearer token.
pub struct Api {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl Api {
    /// Build a client from the environment.
    ///
    /// `PORTICO_BASE_URL` overrides the default base URL; `PORTICO_TOKEN`
    /// supplies the bearer token for endpoints that require one.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("PORTICO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("PORTICO_TOKEN").ok();
        Self::new(base_url, token)
    }

    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Same base URL, different (or no) bearer token.
    pub fn with_token(&self, token: Option<String>) -> Result<Self> {
        Self::new(self.base_url.clone(), token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.send(self.http.get(&url), &url)
    }

    pub fn post(&self, path: &str, body: &Value) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.send(self.http.post(&url).json(body), &url)
    }

    pub fn put(&self, path: &str, body: &Value) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        self.send(self.http.put(&url).json(body), &url)
    }

    /// PUT with no body, for endpoints like mark-as-read.
    pub fn put_empty(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        self.send(self.http.put(&url), &url)
    }

    pub fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(&url), &url)
    }

    pub fn post_multipart(&self, path: &str, form: Form) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        self.send(self.http.post(&url).multipart(form), &url)
    }

    fn send(&self, req: RequestBuilder, url: &str) -> Result<Response> {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        req.send().with_context(|| format!("request to {url} failed"))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
