//! Figma REST API client
//!
//! Three calls are needed for an export: the page tree, the rendered-image URLs
//! for a batch of components, and the SVG source behind each of those URLs.
//! None of them retry or cache.

use crate::document::{DocumentNode, FileResponse};
use crate::error::{ExportError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument};

/// Default Figma API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";

/// Header carrying the personal access token
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Component id → transient download URL
pub type ImageUrlMap = HashMap<String, String>;

/// Source of document trees and rendered SVGs
#[allow(async_fn_in_trait)]
pub trait DesignApi {
    /// Fetch the document tree restricted to `page_id`
    async fn fetch_tree(&self, file_id: &str, page_id: &str) -> Result<DocumentNode>;

    /// Fetch SVG render URLs for all `ids` in one request
    async fn fetch_image_urls(&self, ids: &[&str], file_id: &str) -> Result<ImageUrlMap>;

    /// Download the raw content behind a render URL
    async fn fetch_raw_source(&self, url: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

/// HTTP implementation of [`DesignApi`]
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl FigmaClient {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Authorized GET against the API
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let request = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .query(query);
        Self::send(request, url).await
    }

    async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response> {
        debug!("Sending HTTP GET request");
        let response = request.send().await.map_err(|source| {
            error!("HTTP request failed: {}", source);
            ExportError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            error!("Non-success status code: {}", status);
            return Err(ExportError::RemoteFetch {
                url: url.to_string(),
                status: status.to_string(),
            });
        }

        Ok(response)
    }
}

impl DesignApi for FigmaClient {
    #[instrument(skip(self), fields(file = %file_id, page = %page_id))]
    async fn fetch_tree(&self, file_id: &str, page_id: &str) -> Result<DocumentNode> {
        let url = format!("{}/v1/files/{}", self.base, file_id);
        info!("Fetching document tree");

        let body: FileResponse = self
            .get(&url, &[("ids", page_id)])
            .await?
            .json()
            .await
            .map_err(|source| ExportError::Decode {
                url: url.clone(),
                source,
            })?;

        Ok(body.document)
    }

    #[instrument(skip(self, ids), fields(file = %file_id, count = ids.len()))]
    async fn fetch_image_urls(&self, ids: &[&str], file_id: &str) -> Result<ImageUrlMap> {
        let url = format!("{}/v1/images/{}", self.base, file_id);
        let joined = ids.join(",");
        info!("Fetching image URLs");

        let body: ImagesResponse = self
            .get(&url, &[("ids", joined.as_str()), ("format", "svg")])
            .await?
            .json()
            .await
            .map_err(|source| ExportError::Decode {
                url: url.clone(),
                source,
            })?;

        if let Some(err) = body.err {
            error!("API reported error: {}", err);
            return Err(ExportError::RemoteApi(err));
        }

        Ok(body
            .images
            .into_iter()
            .filter_map(|(id, url)| url.map(|url| (id, url)))
            .collect())
    }

    /// Render URLs are pre-signed, so no token is sent with them
    #[instrument(skip(self))]
    async fn fetch_raw_source(&self, url: &str) -> Result<String> {
        let content = Self::send(self.http.get(url), url)
            .await?
            .text()
            .await
            .map_err(|source| ExportError::Decode {
                url: url.to_string(),
                source,
            })?;

        debug!("Successfully read {} bytes", content.len());
        Ok(content)
    }
}
