//! Remote existence checks against the Elrond API.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::config::LookupMode;

/// HTTP client that answers "does this token or collection still exist?".
#[derive(Clone)]
pub struct HttpAssetRegistry {
    client: Client,
    base: Url,
    lookup: LookupMode,
}

impl HttpAssetRegistry {
    /// Create a registry for `api_url` (no trailing slash required).
    pub fn new(api_url: &str, lookup: LookupMode) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("elrond-assets-tools/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        let base = Url::parse(api_url).with_context(|| format!("invalid API URL {api_url}"))?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("API URL {api_url} cannot carry a path"));
        }

        Ok(Self {
            client,
            base,
            lookup,
        })
    }

    pub fn api_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Base URL extended with `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL {} cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `HEAD /tokens/{id}` answers 200.
    pub async fn token_exists(&self, id: &str) -> Result<bool> {
        let url = self.endpoint(&["tokens", id])?;
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;
        debug!(
            target: "elrond_assets_tools::cleanup",
            url = %url,
            status = response.status().as_u16(),
            "Token lookup"
        );
        Ok(response.status() == StatusCode::OK)
    }

    /// Collection lookup according to the configured [`LookupMode`].
    pub async fn collection_exists(&self, id: &str) -> Result<bool> {
        match self.lookup {
            LookupMode::Collections => {
                let url = self.endpoint(&["collections", id])?;
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("request to {url} failed"))?;
                debug!(
                    target: "elrond_assets_tools::cleanup",
                    url = %url,
                    status = response.status().as_u16(),
                    "Collection lookup"
                );
                Ok(response.status() == StatusCode::OK)
            }
            LookupMode::NftQuery => {
                let url = self.endpoint(&["nfts"])?;
                let response = self
                    .client
                    .get(url.clone())
                    .query(&[("collection", id)])
                    .send()
                    .await
                    .with_context(|| format!("request to {url}?collection={id} failed"))?;
                let status = response.status();
                debug!(
                    target: "elrond_assets_tools::cleanup",
                    url = %url,
                    collection = id,
                    status = status.as_u16(),
                    "NFT collection query"
                );
                if status != StatusCode::OK {
                    return Ok(false);
                }
                let body: Value = response
                    .json()
                    .await
                    .with_context(|| format!("invalid JSON from {url}?collection={id}"))?;
                Ok(body.as_array().is_some_and(|items| !items.is_empty()))
            }
        }
    }

    /// True when either the token or the collection lookup succeeds.
    pub async fn asset_exists(&self, id: &str) -> Result<bool> {
        if self.token_exists(id).await? {
            return Ok(true);
        }
        self.collection_exists(id).await
    }
}
