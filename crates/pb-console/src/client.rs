//! HTTP client for a remote PlotBot API instance.
//!
//! Implements [`AnswerSource`] over the pb-api routes so the console's
//! session loop works unchanged against a deployed server.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use pb_protocol::{AnswerReply, PlotRecord};
use pb_session::{AnswerSource, SourceError, SourceResult};

/// Client for the PlotBot lookup API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. "http://localhost:3000").
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Build a URL from path segments, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> SourceResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SourceError::Unavailable("base URL cannot have paths".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> SourceResult<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> SourceResult<T> {
    if !response.status().is_success() {
        return Err(SourceError::Unavailable(format!(
            "server returned {}",
            response.status()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| SourceError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl AnswerSource for ApiClient {
    async fn subjects(&self) -> SourceResult<Vec<String>> {
        let url = self.endpoint(&["api", "v1", "menu"])?;
        decode(self.get(url).await?).await
    }

    async fn questions(&self, subject: &str) -> SourceResult<Option<Vec<String>>> {
        let url = self.endpoint(&["api", "v1", "subjects", subject, "questions"])?;
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(decode(response).await?))
    }

    async fn answer(&self, question: &str) -> SourceResult<Option<String>> {
        let mut url = self.endpoint(&["api", "v1", "answer"])?;
        url.query_pairs_mut().append_pair("question", question);
        let reply: AnswerReply = decode(self.get(url).await?).await?;
        // The server never 404s here: unknown questions already carry
        // the fallback text.
        Ok(Some(reply.answer))
    }

    async fn plot(&self, number: &str) -> SourceResult<Option<PlotRecord>> {
        let url = self.endpoint(&["api", "v1", "plots", number])?;
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(decode(response).await?))
    }
}
