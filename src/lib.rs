//! # libdocs - Library Documentation Lookup
//!
//! Resolve a library name through the Context7 API and fetch its documentation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libdocs::{ClientConfig, Docs, DocsClient, Lookup};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DocsClient::new(ClientConfig::default().with_api_key("my-key"))?;
//!
//!     let lookup = Docs::library("next.js").topic("routing").lookup(&client).await;
//!     if let Lookup::Found(docs) = lookup {
//!         println!("{} ({}): {} bytes", docs.library.title, docs.library.id, docs.text.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context7;
pub mod error;
pub mod format;
pub mod outcome;
pub mod pipeline;

pub use config::ClientConfig;
pub use context7::{
    DEFAULT_TOKENS, DocsClient, DocsRequest, LibraryDocs, LibraryRecord, QueryParameters,
};
pub use error::{DocsError, Result};
pub use format::{DEFAULT_MAX_CHARS, NOT_FOUND_MESSAGE, format_for_display};
pub use outcome::Lookup;
pub use pipeline::{Pipeline, PipelineOutcome, Stage};

/// Main entry point for documentation lookups
pub struct Docs;

impl Docs {
    /// Look up documentation for a library by name
    pub fn library(name: &str) -> DocsRequest {
        DocsRequest::new(name)
    }
}
