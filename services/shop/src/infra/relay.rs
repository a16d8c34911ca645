//! Outbound fetch relay.
//!
//! **Intentionally unsafe.** `UnrestrictedRelay` fetches any URL it is handed:
//! no scheme or host filtering, no allow-list, loopback and link-local targets
//! included, redirects followed by the client's default policy. It is the
//! lab's SSRF primitive and must not be reused elsewhere.

use std::time::Duration;

use anyhow::Context as _;
use axum::http::{HeaderMap, StatusCode, header};
use bytes::Bytes;

/// Upstream response captured in full.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RelayedResponse {
    /// Upstream headers minus the framing headers the server recomputes for
    /// the relayed body.
    pub fn end_to_end_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        for name in [
            header::TRANSFER_ENCODING,
            header::CONNECTION,
            header::CONTENT_LENGTH,
        ] {
            headers.remove(name);
        }
        headers
    }
}

#[derive(Clone)]
pub struct UnrestrictedRelay {
    pub client: reqwest::Client,
}

impl UnrestrictedRelay {
    /// Build the relay client. `timeout` of `None` means a hanging upstream
    /// holds the request open indefinitely.
    pub fn build(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build relay client")?;
        Ok(Self { client })
    }

    /// GET `url` and buffer the whole response.
    pub async fn fetch(&self, url: &str) -> anyhow::Result<RelayedResponse> {
        tracing::debug!(url, "relaying outbound fetch");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("read body of {url}"))?;
        Ok(RelayedResponse {
            status,
            headers,
            body,
        })
    }
}
