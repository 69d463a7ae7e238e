// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Sanity query API.
//!
//! One GET per fetch, no retry. Every failure is returned as
//! [`Error::Content`] and left to the caller to log.

use super::document::{nullable, ContentDocument};
use super::query::{query_url, PORTFOLIO_QUERY};
use crate::config::ContentEndpoint;
use crate::error::{ContentError, Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("NaomiPortfolio/", env!("CARGO_PKG_VERSION"));

/// Anything able to produce the page document.
pub trait ContentSource: Send + Sync {
    /// Starts one fetch. The returned future owns everything it needs.
    fn fetch(&self) -> BoxFuture<'static, Result<ContentDocument>>;
}

/// Builds the HTTP client shared by content and image requests.
///
/// # Errors
///
/// Returns [`ContentError::Transport`] if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::Content(ContentError::Transport(e.to_string())))
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default, deserialize_with = "nullable")]
    result: ContentDocument,
}

/// Parses a query response body (`{"result": …, "ms": …, "query": …}`).
///
/// A `null` result yields the empty document.
///
/// # Errors
///
/// Returns [`ContentError::Malformed`] if the body is not a JSON envelope.
pub fn parse_response(body: &str) -> Result<ContentDocument> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.result)
}

/// Read-only client bound to one project and dataset.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    url: Url,
}

impl ContentClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Fails if the endpoint does not form a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &ContentEndpoint) -> Result<Self> {
        let http = build_http_client(endpoint.timeout)?;
        Self::with_http(endpoint, http)
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_http(endpoint: &ContentEndpoint, http: reqwest::Client) -> Result<Self> {
        let url = query_url(endpoint, PORTFOLIO_QUERY)?;
        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issues the query and parses the response.
    pub async fn query(&self) -> Result<ContentDocument> {
        tracing::debug!(host = self.url.host_str().unwrap_or_default(), "querying content store");

        let response = self.http.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

impl ContentSource for ContentClient {
    fn fetch(&self) -> BoxFuture<'static, Result<ContentDocument>> {
        let client = self.clone();
        async move { client.query().await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::document::ImageRef;

    #[test]
    fn parses_full_envelope() {
        let body = r#"{
            "result": {
                "portfolio": {
                    "headshot": {"asset": {"url": "https://cdn.sanity.io/h.jpg"}},
                    "description": "Hello",
                    "images": [
                        {"asset": {"url": "https://cdn.sanity.io/1.jpg"}},
                        {"asset": {"url": "https://cdn.sanity.io/2.jpg"}}
                    ]
                },
                "brands": [{"logo": {"asset": {"url": "https://cdn.sanity.io/b.png"}}}],
                "socials": {"instagram": "https://instagram.com/x"},
                "email": "hello@example.com"
            },
            "ms": 4,
            "query": "..."
        }"#;

        let doc = parse_response(body).expect("valid envelope");

        assert_eq!(
            doc.portfolio.headshot,
            Some(ImageRef::Remote("https://cdn.sanity.io/h.jpg".into()))
        );
        assert_eq!(doc.portfolio.description.as_deref(), Some("Hello"));
        assert_eq!(doc.portfolio.images.len(), 2);
        assert_eq!(doc.brands.len(), 1);
        assert_eq!(doc.socials.instagram.as_deref(), Some("https://instagram.com/x"));
        assert_eq!(doc.email.as_deref(), Some("hello@example.com"));
    }

    #[test]
    fn null_result_is_empty_document() {
        let doc = parse_response(r#"{"result": null, "ms": 1}"#).expect("valid envelope");
        assert!(doc.is_empty());
    }

    #[test]
    fn missing_sections_are_empty() {
        let doc = parse_response(r#"{"result": {"portfolio": null, "email": null}}"#)
            .expect("valid envelope");
        assert!(doc.is_empty());
    }

    #[test]
    fn malformed_body_is_content_error() {
        match parse_response("<html>oops</html>") {
            Err(Error::Content(ContentError::Malformed(_))) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn client_url_targets_configured_dataset() {
        let endpoint = ContentEndpoint {
            dataset: "staging".into(),
            ..ContentEndpoint::default()
        };
        let client = ContentClient::new(&endpoint).expect("client builds");
        assert!(client.url().path().ends_with("/data/query/staging"));
    }

    #[test]
    fn user_agent_names_the_application() {
        assert!(USER_AGENT.starts_with("NaomiPortfolio/"));
    }
}
