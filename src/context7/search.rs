//! Library search against the `/search` endpoint

use super::DocsClient;
use crate::{Lookup, Result};
use serde::{Deserialize, Deserializer};
use tracing::{debug, error, warn};

/// Top search hit for a library name
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryRecord {
    /// Canonical identifier, e.g. `/vercel/next.js`
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ranking value assigned by the API
    pub trust_score: f64,
    pub total_snippets: i64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchHit>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    trust_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    total_snippets: Option<i64>,
}

/// Read a field, treating a value of the wrong type like a missing one.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl From<SearchHit> for LibraryRecord {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id.unwrap_or_default(),
            title: hit.title.unwrap_or_default(),
            description: hit.description.unwrap_or_default(),
            trust_score: hit.trust_score.unwrap_or(0.0),
            total_snippets: hit.total_snippets.unwrap_or(0),
        }
    }
}

/// Trim surrounding whitespace. Inner spaces are sent form-encoded as `+`.
pub(crate) fn normalize_query(query: &str) -> &str {
    query.trim()
}

impl DocsClient {
    /// Resolve a free-text library name to the API's top-ranked library.
    ///
    /// Results are taken in the order the API returns them. Failures are
    /// logged and returned as [`Lookup::Failed`].
    pub async fn search(&self, query: &str) -> Lookup<LibraryRecord> {
        match self.try_search(query).await {
            Ok(Some(library)) => Lookup::Found(library),
            Ok(None) => {
                warn!(query, "no libraries matched");
                Lookup::NotFound
            }
            Err(err) => {
                error!(query, "Error searching library: {}", err);
                Lookup::Failed(err)
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Option<LibraryRecord>> {
        let url = format!("{}/search", self.config.base_url);
        debug!(%url, query, "searching library");

        let response = self
            .get(&url)
            .query(&[("query", normalize_query(query))])
            .timeout(self.config.search_timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(LibraryRecord::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"results":[{"id":"/pmndrs/zustand"}]}"#).unwrap();
        let record = LibraryRecord::from(parsed.results.unwrap().remove(0));
        assert_eq!(record.id, "/pmndrs/zustand");
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert_eq!(record.trust_score, 0.0);
        assert_eq!(record.total_snippets, 0);
    }

    #[test]
    fn null_and_absent_results_are_empty() {
        let absent: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(absent.results.is_none());
        let null: SearchResponse = serde_json::from_str(r#"{"results":null}"#).unwrap();
        assert!(null.results.is_none());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"results":[{"id":"/vercel/next.js","title":"Next.js",
                "description":"The React Framework","trustScore":9.5,"totalSnippets":3200}]}"#,
        )
        .unwrap();
        let record = LibraryRecord::from(parsed.results.unwrap().remove(0));
        assert_eq!(record.title, "Next.js");
        assert_eq!(record.trust_score, 9.5);
        assert_eq!(record.total_snippets, 3200);
    }

    #[test]
    fn odd_metadata_does_not_sink_the_hit() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"results":[{"id":"/a/b","title":"A","trustScore":-1,"totalSnippets":-1}]}"#,
        )
        .unwrap();
        let record = LibraryRecord::from(parsed.results.unwrap().remove(0));
        assert_eq!(record.id, "/a/b");
        assert_eq!(record.trust_score, -1.0);
        assert_eq!(record.total_snippets, -1);

        let parsed: SearchResponse = serde_json::from_str(
            r#"{"results":[{"id":"/a/b","title":null,"trustScore":"high","totalSnippets":12.5}]}"#,
        )
        .unwrap();
        let record = LibraryRecord::from(parsed.results.unwrap().remove(0));
        assert_eq!(record.id, "/a/b");
        assert_eq!(record.title, "");
        assert_eq!(record.trust_score, 0.0);
        assert_eq!(record.total_snippets, 0);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(normalize_query("  react hook form \n"), "react hook form");
    }
}
