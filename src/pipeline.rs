//! Search, fetch, format and print, in that order

use crate::format::{DISPLAY_MAX_CHARS, format_for_display};
use crate::{DEFAULT_TOKENS, DocsClient, LibraryRecord, Lookup, QueryParameters, Result};
use std::io::Write;
use tracing::{Instrument, debug, info_span};

/// Where the pipeline stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Searching,
    Fetching,
    Formatting,
    Failed,
}

/// Final state of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Documentation was written to the output stream
    Printed {
        library: LibraryRecord,
        total_chars: usize,
    },
    /// Search returned nothing or failed
    LibraryNotFound,
    /// The library resolved but no documentation could be fetched
    DocsUnavailable { library: LibraryRecord },
}

impl PipelineOutcome {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineOutcome::Printed { .. } => Stage::Formatting,
            PipelineOutcome::LibraryNotFound | PipelineOutcome::DocsUnavailable { .. } => {
                Stage::Failed
            }
        }
    }
}

/// Driver that looks up one library and prints its documentation.
///
/// Progress and diagnostics go to `err`; only the formatted documentation is
/// written to `out`, and only when every stage succeeded.
pub struct Pipeline<'a> {
    client: &'a DocsClient,
    tokens: u32,
    max_chars: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(client: &'a DocsClient) -> Self {
        Self {
            client,
            tokens: DEFAULT_TOKENS,
            max_chars: DISPLAY_MAX_CHARS,
        }
    }

    pub fn tokens(mut self, tokens: u32) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub async fn run<O: Write, E: Write>(
        &self,
        query: &str,
        topic: Option<&str>,
        out: &mut O,
        err: &mut E,
    ) -> Result<PipelineOutcome> {
        self.run_stages(query, topic, out, err)
            .instrument(info_span!("pipeline", query))
            .await
    }

    async fn run_stages<O: Write, E: Write>(
        &self,
        query: &str,
        topic: Option<&str>,
        out: &mut O,
        err: &mut E,
    ) -> Result<PipelineOutcome> {
        debug!(stage = ?Stage::Searching);
        writeln!(err, "🔍 Searching for library: {query}")?;

        let library = match self.client.search(query).await {
            Lookup::Found(library) => library,
            Lookup::NotFound | Lookup::Failed(_) => {
                writeln!(err, "❌ Library '{query}' not found in Context7 database.")?;
                writeln!(
                    err,
                    "Suggestion: Try alternative names or check https://context7.com"
                )?;
                debug!(stage = ?Stage::Failed);
                return Ok(PipelineOutcome::LibraryNotFound);
            }
        };

        writeln!(err, "✅ Found: {} (ID: {})", library.title, library.id)?;
        writeln!(err, "   Trust Score: {}", library.trust_score)?;
        writeln!(err, "   Total Snippets: {}", library.total_snippets)?;

        debug!(stage = ?Stage::Fetching);
        let topic_msg = topic
            .filter(|t| !t.is_empty())
            .map(|t| format!(" with topic '{t}'"))
            .unwrap_or_default();
        writeln!(err, "\n📚 Fetching documentation{topic_msg}...")?;

        let params = QueryParameters::new(topic, self.tokens);
        let docs = match self.client.fetch_docs(&library.id, &params).await {
            Lookup::Found(docs) => docs,
            Lookup::NotFound | Lookup::Failed(_) => {
                writeln!(err, "❌ Failed to fetch documentation for {}", library.title)?;
                writeln!(
                    err,
                    "   This might be a temporary issue or the library may not have docs available"
                )?;
                debug!(stage = ?Stage::Failed);
                return Ok(PipelineOutcome::DocsUnavailable { library });
            }
        };

        writeln!(err, "✅ Retrieved documentation successfully")?;

        debug!(stage = ?Stage::Formatting);
        let rule = "=".repeat(80);
        writeln!(err, "\n{rule}")?;
        writeln!(err, "DOCUMENTATION: {}", library.title)?;
        writeln!(err, "{rule}")?;

        writeln!(out, "{}", format_for_display(&docs, self.max_chars))?;
        out.flush()?;

        Ok(PipelineOutcome::Printed {
            library,
            total_chars: docs.chars().count(),
        })
    }
}
