// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the company analysis service.
//!
//! The service exposes a single analysis endpoint:
//!
//! ```text
//! POST {base_url}/api/scrape
//! Content-Type: application/json
//!
//! {"url": "<company website>"}
//! ```
//!
//! The response status is not inspected. The body is parsed as JSON; a truthy
//! `error` key marks a failure, anything else is decoded as a
//! [`CompanyInfo`]. The service also answers `GET {base_url}/api/health`,
//! which is used as an optional reachability probe at startup.

use crate::domain::company::{is_truthy, CompanyInfo};
use crate::error::{Error, Result};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

/// Path of the analysis endpoint, relative to the service base URL.
pub const SCRAPE_PATH: &str = "/api/scrape";

/// Path of the health endpoint, relative to the service base URL.
pub const HEALTH_PATH: &str = "/api/health";

const USER_AGENT: &str = concat!("CompanyAnalyzer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
}

/// Cheap-to-clone handle on the analysis service.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: reqwest::Client,
    scrape_url: Url,
    health_url: Url,
}

impl ScrapeClient {
    /// Builds a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:8000`).
    ///
    /// A path prefix on the base is kept: `http://host/svc` serves the
    /// analysis endpoint at `http://host/svc/api/scrape`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid backend URL '{base_url}': {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let scrape_url = endpoint(&base, SCRAPE_PATH)?;
        let health_url = endpoint(&base, HEALTH_PATH)?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            scrape_url,
            health_url,
        })
    }

    /// Full URL of the analysis endpoint.
    #[must_use]
    pub fn scrape_url(&self) -> &Url {
        &self.scrape_url
    }

    /// Asks the service to analyze `url`. The string is sent untouched.
    pub async fn scrape(self, url: String) -> Result<CompanyInfo> {
        tracing::info!(target_url = %url, endpoint = %self.scrape_url, "requesting company analysis");

        let response = self
            .http
            .post(self.scrape_url.clone())
            .json(&ScrapeRequest { url: &url })
            .send()
            .await?;

        let status = response.status();
        // Body errors surface as `Error::Decode` through `From<reqwest::Error>`.
        let body: Value = response.json().await?;

        let outcome = interpret_response(body);
        match &outcome {
            Ok(_) => tracing::info!(%status, "company analysis received"),
            Err(err) => tracing::warn!(%status, error = %err, "company analysis failed"),
        }
        outcome
    }

    /// Checks that the service answers its health endpoint with a success status.
    pub async fn health(self) -> Result<()> {
        let response = self
            .http
            .get(self.health_url.clone())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Http(format!("HTTP status: {status}")))
        }
    }
}

/// Resolves an endpoint path below `base`, which must end with a slash.
fn endpoint(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::Config(e.to_string()))
}

/// Turns a parsed response body into the analysis outcome.
///
/// A truthy `error` key wins over any other content, including the
/// placeholder `basic_info` the service sends alongside its errors.
pub fn interpret_response(body: Value) -> Result<CompanyInfo> {
    if let Some(error) = body.get("error").filter(|value| is_truthy(value)) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(Error::Server(message));
    }

    Ok(CompanyInfo::from_json(body)?)
}
