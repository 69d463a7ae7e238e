// SPDX-License-Identifier: MPL-2.0
//! GROQ projection and query endpoint construction.

use crate::config::ContentEndpoint;
use crate::error::{ContentError, Result};
use reqwest::Url;

/// Single read-only projection covering every section of the page.
pub const PORTFOLIO_QUERY: &str = r#"{
  "portfolio": *[_type == "portfolio"][0] {
    headshot { asset-> { url } },
    description,
    images[] { asset-> { url } }
  },
  "brands": *[_type == "brands"] { logo { asset-> { url } } },
  "socials": *[_type == "socials"][0],
  "email": *[_type == "contact"][0].email
}"#;

/// Host serving the query API for a project.
#[must_use]
pub fn api_host(endpoint: &ContentEndpoint) -> String {
    let edge = if endpoint.use_cdn { "apicdn" } else { "api" };
    format!("{}.{}.sanity.io", endpoint.project_id, edge)
}

/// Builds the full GET URL for `query`, with the query string encoded.
///
/// # Errors
///
/// Returns [`ContentError::InvalidEndpoint`] when the project id, API version
/// or dataset cannot form a valid URL.
pub fn query_url(endpoint: &ContentEndpoint, query: &str) -> Result<Url> {
    let valid_segment =
        |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid_segment(&endpoint.project_id) {
        return Err(ContentError::InvalidEndpoint(format!(
            "project id {:?}",
            endpoint.project_id
        ))
        .into());
    }
    if !valid_segment(&endpoint.dataset) {
        return Err(ContentError::InvalidEndpoint(format!("dataset {:?}", endpoint.dataset)).into());
    }
    if !valid_segment(&endpoint.api_version) {
        return Err(ContentError::InvalidEndpoint(format!(
            "api version {:?}",
            endpoint.api_version
        ))
        .into());
    }

    let base = format!(
        "https://{}/v{}/data/query/{}",
        api_host(endpoint),
        endpoint.api_version,
        endpoint.dataset
    );
    Url::parse_with_params(&base, &[("query", query)])
        .map_err(|err| ContentError::InvalidEndpoint(err.to_string()).into())
}
