//! Places API HTTP client.
//!
//! Async client for the place-search provider. Handles authentication,
//! bounds concurrent requests with a semaphore to respect provider rate
//! limits, and converts the wire response into domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::Place;
use crate::enrich::{LookupError, PlaceLookup};

use super::convert::convert_place;
use super::error::PlaceError;
use super::types::PlaceSearchResponse;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default provenance tag recorded on enriched stops.
const DEFAULT_SOURCE_TAG: &str = "maps";

/// Configuration for the places client.
///
/// The provider is deployment-specific, so the base URL has no default:
/// any service answering the search contract can sit behind it.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Base URL of the places API
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Provenance tag recorded on enriched stops
    pub source_tag: String,
}

impl PlacesConfig {
    /// Create a new config for the given provider and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the provenance tag.
    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }
}

/// Places API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// concurrency limit.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    source_tag: String,
    semaphore: Arc<Semaphore>,
}

impl PlacesClient {
    /// Create a new places client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self, PlaceError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| PlaceError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            source_tag: config.source_tag,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Search for the single best-matching place for a free-text query.
    ///
    /// Returns `Ok(None)` when the provider has no match; errors are
    /// reserved for transport and protocol failures.
    pub async fn find_place(&self, query: &str) -> Result<Option<Place>, PlaceError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PlaceError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/places/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlaceError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlaceError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PlaceSearchResponse =
            serde_json::from_str(&body).map_err(|e| PlaceError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(parsed.results.first().map(convert_place))
    }
}

impl PlaceLookup for PlacesClient {
    async fn find_one(&self, query: &str) -> Result<Option<Place>, LookupError> {
        self.find_place(query)
            .await
            .map_err(|e| LookupError(e.to_string()))
    }

    fn source_tag(&self) -> &str {
        &self.source_tag
    }
}
