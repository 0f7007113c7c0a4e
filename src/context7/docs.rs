//! Documentation retrieval from the per-library endpoint

use super::DocsClient;
use crate::format::take_chars;
use crate::{DocsError, Lookup, Result};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Token budget requested when the caller gives none.
pub const DEFAULT_TOKENS: u32 = 5000;

/// Characters of an error body kept for diagnostics.
pub const ERROR_BODY_PREVIEW: usize = 200;

/// Query string sent with a documentation request
#[derive(Debug, Clone, Serialize)]
pub struct QueryParameters {
    pub tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS,
            topic: None,
        }
    }
}

impl QueryParameters {
    pub fn new(topic: Option<&str>, tokens: u32) -> Self {
        Self {
            tokens,
            topic: topic.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }
}

/// `{base}/{id}` with any leading slashes removed from the identifier
pub(crate) fn docs_url(base_url: &str, library_id: &str) -> String {
    format!("{}/{}", base_url, library_id.trim_start_matches('/'))
}

impl DocsClient {
    /// Fetch documentation text for a canonical library identifier.
    ///
    /// A 404 or an empty body is [`Lookup::NotFound`]. Any other non-2xx
    /// status becomes [`DocsError::Status`] holding a body preview.
    pub async fn fetch_docs(&self, library_id: &str, params: &QueryParameters) -> Lookup<String> {
        match self.try_fetch_docs(library_id, params).await {
            Ok(Some(text)) => Lookup::Found(text),
            Ok(None) => Lookup::NotFound,
            Err(err) => {
                error!(library_id, "Error fetching docs: {}", err);
                Lookup::Failed(err)
            }
        }
    }

    async fn try_fetch_docs(
        &self,
        library_id: &str,
        params: &QueryParameters,
    ) -> Result<Option<String>> {
        let url = docs_url(&self.config.base_url, library_id);
        debug!(%url, tokens = params.tokens, topic = ?params.topic, "fetching documentation");

        let response = self
            .get(&url)
            .query(params)
            .timeout(self.config.fetch_timeout)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "documentation response");

        if status == StatusCode::NOT_FOUND {
            warn!(library_id, "Library not found or no docs available");
            return Ok(None);
        }

        let text = response.text().await?;

        if !status.is_success() {
            let body = take_chars(&text, ERROR_BODY_PREVIEW).to_string();
            error!(status = status.as_u16(), "Response body: {}", body);
            return Err(DocsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if text.trim().is_empty() {
            warn!(library_id, "No documentation content returned");
            return Ok(None);
        }

        info!("Retrieved {} characters of documentation", text.chars().count());
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slashes_are_stripped() {
        assert_eq!(
            docs_url("https://context7.com/api/v1", "/vercel/next.js"),
            "https://context7.com/api/v1/vercel/next.js"
        );
        assert_eq!(docs_url("http://x", "//a/b"), "http://x/a/b");
        assert_eq!(docs_url("http://x", "a/b"), "http://x/a/b");
    }

    #[test]
    fn empty_topic_is_dropped() {
        assert_eq!(QueryParameters::new(Some(""), 10).topic, None);
        assert_eq!(
            QueryParameters::new(Some("routing"), 10).topic.as_deref(),
            Some("routing")
        );
        assert_eq!(QueryParameters::default().tokens, DEFAULT_TOKENS);
    }
}
