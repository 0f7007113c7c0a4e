//! Client for the Context7 documentation API

use crate::{ClientConfig, Lookup, Result};
use reqwest::header::CONTENT_TYPE;

mod docs;
mod search;

pub use docs::{DEFAULT_TOKENS, ERROR_BODY_PREVIEW, QueryParameters};
pub use search::LibraryRecord;

/// HTTP client bound to one API endpoint and key
pub struct DocsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl DocsClient {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    /// GET request carrying the bearer token and JSON content type
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
    }
}

/// A library together with the documentation fetched for it
#[derive(Debug, Clone)]
pub struct LibraryDocs {
    pub library: LibraryRecord,
    pub text: String,
}

/// Builder for a search-then-fetch lookup
pub struct DocsRequest {
    library: String,
    params: QueryParameters,
}

impl DocsRequest {
    /// Create a new lookup for the given library name
    pub fn new(library: &str) -> Self {
        Self {
            library: library.to_string(),
            params: QueryParameters::default(),
        }
    }

    /// Narrow the documentation to a topic (e.g. "routing")
    pub fn topic(mut self, topic: &str) -> Self {
        self.params.topic = Some(topic.to_string());
        self
    }

    /// Documentation length budget sent to the API
    pub fn tokens(mut self, tokens: u32) -> Self {
        self.params.tokens = tokens;
        self
    }

    /// Resolve the library, then fetch its documentation
    pub async fn lookup(self, client: &DocsClient) -> Lookup<LibraryDocs> {
        let library = match client.search(&self.library).await {
            Lookup::Found(library) => library,
            Lookup::NotFound => return Lookup::NotFound,
            Lookup::Failed(err) => return Lookup::Failed(err),
        };

        let docs = client.fetch_docs(&library.id, &self.params).await;
        docs.map(|text| LibraryDocs { library, text })
    }
}
