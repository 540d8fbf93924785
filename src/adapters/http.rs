use crate::domain::ports::Fetch;
use crate::utils::error::{Result, WhatsDueError};
use async_trait::async_trait;
use reqwest::Client;

/// Production `Fetch` implementation over a shared reqwest client. Plain
/// GETs expecting a textual body; non-success statuses are transport
/// failures like any network error.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let transport = |source: reqwest::Error| WhatsDueError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        tracing::debug!(%url, status = %response.status(), "GET completed");
        let response = response.error_for_status().map_err(transport)?;
        response.text().await.map_err(transport)
    }
}
