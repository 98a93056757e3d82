//! HTTP client for the Ghost Content API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::types::{BrowseParams, Post, PostsResponse};
use super::GhostError;
use crate::config::GhostConfig;

/// Versions that are addressed through the URL path
const PATH_VERSIONS: &[&str] = &["v2", "v3", "v4", "v5", "canary"];

/// How the API version is communicated to Ghost
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPath {
    /// `/ghost/api/{version}/content/`
    Versioned(String),
    /// `/ghost/api/content/` with an `Accept-Version` header
    Unversioned { accept_version: String },
}

impl ApiPath {
    /// Pick the addressing scheme for a configured version string
    pub fn for_version(version: &str) -> Result<Self, GhostError> {
        let version = version.trim();
        if PATH_VERSIONS.contains(&version) {
            return Ok(ApiPath::Versioned(version.to_string()));
        }
        if is_minor_version(version) {
            return Ok(ApiPath::Unversioned {
                accept_version: version.to_string(),
            });
        }
        Err(GhostError::UnsupportedVersion(version.to_string()))
    }

    fn prefix(&self) -> String {
        match self {
            ApiPath::Versioned(version) => format!("ghost/api/{}/content/", version),
            ApiPath::Unversioned { .. } => "ghost/api/content/".to_string(),
        }
    }
}

/// `v5.0`, `v5.12` and so on
fn is_minor_version(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    let mut parts = rest.splitn(2, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

/// Read-only Ghost Content API client
///
/// Built once from [`GhostConfig`] and shared by every feed; it holds no
/// mutable state after construction.
#[derive(Debug, Clone)]
pub struct GhostClient {
    client: Client,
    api_base: Url,
    api_path: ApiPath,
    key: String,
}

impl GhostClient {
    /// Create a client for the configured Ghost install
    pub fn new(config: &GhostConfig) -> Result<Self, GhostError> {
        config.validate()?;

        let api_path = ApiPath::for_version(&config.version)?;
        let api_base = Url::parse(&format!(
            "{}/{}",
            config.url.trim_end_matches('/'),
            api_path.prefix()
        ))?;

        tracing::debug!("Ghost content API at {}", api_base);

        Ok(Self {
            client: Client::new(),
            api_base,
            api_path,
            key: config.key.clone(),
        })
    }

    /// Base URL every resource path is joined onto
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Browse posts with the given query options
    pub async fn browse_posts(&self, params: &BrowseParams) -> Result<Vec<Post>, GhostError> {
        let response: PostsResponse = self.get("posts/", &params.query_pairs()).await?;
        tracing::debug!("Fetched {} posts", response.posts.len());
        Ok(response.posts)
    }

    /// Make a GET request against a content resource
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, GhostError> {
        let endpoint = self.api_base.join(resource)?;
        let mut request = self
            .client
            .get(endpoint.clone())
            .query(&[("key", self.key.as_str())])
            .query(query);

        if let ApiPath::Unversioned { ref accept_version } = self.api_path {
            request = request.header("Accept-Version", accept_version);
        }

        tracing::debug!("GET {}", endpoint);
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GhostError::Status {
                status,
                message: error_message(status, &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// First message from Ghost's `{"errors": [...]}` body, falling back to the status reason
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .map(|e| e.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string())
}
