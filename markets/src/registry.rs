//! Token registry source.
//!
//! Reads SPL token-list documents from a file or over HTTP. The result is a
//! [`TokenList`] that callers scope to a cluster before building a
//! [`TokenCatalog`](crate::catalog::TokenCatalog).

use std::path::Path;

use reqwest::Client;
use tracing::info;

use crate::error::{MarketsError, Result};
use crate::types::TokenList;

/// Parse a token-list JSON document.
pub fn parse_token_list(json: &str) -> Result<TokenList> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a token-list file.
pub async fn load_token_list(path: impl AsRef<Path>) -> Result<TokenList> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let list = parse_token_list(&raw)?;
    info!(path = %path.display(), tokens = list.tokens.len(), "token list loaded");
    Ok(list)
}

/// HTTP client for a published token list.
#[derive(Debug, Clone)]
pub struct TokenRegistryClient {
    client: Client,
    url: String,
}

impl TokenRegistryClient {
    pub fn new(url: &str) -> Result<Self> {
        url::Url::parse(url)
            .map_err(|e| MarketsError::Validation(format!("invalid token list url {url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            url: url.to_string(),
        })
    }

    /// GET the token list.
    pub async fn fetch(&self) -> Result<TokenList> {
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MarketsError::Http {
                status,
                message: body,
            });
        }

        let list = resp.json::<TokenList>().await?;
        info!(url = %self.url, tokens = list.tokens.len(), "token list fetched");
        Ok(list)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
