// src/client.rs

use std::time::Instant;

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::PlaygroundConfig;
use crate::errors::Result;
use crate::models::{FormatResult, RunResult, VersionResult};

/// A client for the playground backend.
///
/// Holds a reusable HTTP transport, the resolved backend/frontend origins,
/// and the toolchain version requested for runs. A single `Client` is safe
/// to use from concurrent call sites; each operation is one independent
/// round trip.
pub struct Client {
    http: reqwest::Client,
    config: PlaygroundConfig,
    version: String,
}

impl Client {
    /// Creates a new `Client` targeting the given toolchain version, with
    /// endpoint origins resolved from the environment.
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_config(version, PlaygroundConfig::from_env())
    }

    /// Creates a new `Client` with explicit endpoint origins.
    pub fn with_config(version: impl Into<String>, config: PlaygroundConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            version: version.into(),
        }
    }

    /// Compiles and runs a snippet on the backend.
    ///
    /// A compile failure is not an `Err`: it comes back as a `RunResult`
    /// whose `errors` field is non-empty. The source travels in the query
    /// string, so very large snippets can exceed practical URL limits.
    pub async fn run(&self, src: &str) -> Result<RunResult> {
        let mut url = self.backend_endpoint("compile")?;
        url.query_pairs_mut()
            .append_pair("version", &self.version)
            .append_pair("body", src);

        self.execute_json(Method::POST, url).await
    }

    /// Reformats a snippet. With `imports` set, the backend also adds and
    /// removes import statements as needed.
    pub async fn format(&self, src: &str, imports: bool) -> Result<FormatResult> {
        let mut url = self.backend_endpoint("fmt")?;
        url.query_pairs_mut()
            .append_pair("imports", if imports { "true" } else { "false" })
            .append_pair("body", src);

        self.execute_json(Method::POST, url).await
    }

    /// Uploads a snippet and returns the shareable frontend link for it.
    ///
    /// Unlike the other operations, the source is sent as the raw request
    /// body; the backend answers with a plain-text snippet id.
    pub async fn share(&self, src: &str) -> Result<Url> {
        let url = self.backend_endpoint("share")?;

        debug!("📡 POST {}", url);
        let start = Instant::now();

        let resp = self.http.post(url).body(src.to_owned()).send().await?;
        let status = resp.status();
        let id = resp.text().await?;

        debug!(
            "📥 share response: {} ({}ms)",
            status,
            start.elapsed().as_millis()
        );

        let link = format!(
            "{}/p/{}",
            self.config.frontend_url.trim_end_matches('/'),
            id
        );
        Ok(Url::parse(&link)?)
    }

    /// Reports the toolchain version the backend is currently running,
    /// independent of the version this client requests for runs.
    pub async fn version(&self) -> Result<VersionResult> {
        let url = self.backend_endpoint("version")?;
        self.execute_json(Method::GET, url).await
    }

    fn backend_endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.backend_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Shared skeleton for the JSON endpoints: dispatch, read the full body,
    /// decode. Decoding from text keeps transport failures and malformed
    /// bodies as distinct error kinds.
    async fn execute_json<T: DeserializeOwned>(&self, method: Method, url: Url) -> Result<T> {
        debug!("📡 {} {}", method, url);
        let start = Instant::now();

        let resp = self.http.request(method, url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        debug!(
            "📥 response: {} ({}ms)",
            status,
            start.elapsed().as_millis()
        );

        Ok(serde_json::from_str(&body)?)
    }
}
