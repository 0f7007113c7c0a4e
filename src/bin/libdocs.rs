use anyhow::Result;
use clap::Parser;
use libdocs::{ClientConfig, DEFAULT_TOKENS, DocsClient, Pipeline, format::DISPLAY_MAX_CHARS};
use tracing_subscriber::{self, EnvFilter};

/// Fetch up-to-date library documentation from Context7
#[derive(Parser)]
#[command(
    name = "libdocs",
    about = "Fetch up-to-date library documentation from Context7",
    long_about = r#"
Fetch up-to-date library documentation from Context7

Searches the Context7 catalog for a library, resolves the top match and prints
its documentation to stdout. Progress and diagnostics go to stderr.

Examples:
  libdocs next.js
  libdocs 'react hook form' validation
"#
)]
struct Args {
    /// Library name to search for (e.g. "react hook form", "next.js")
    library: String,

    /// Optional topic to narrow the documentation (e.g. "routing")
    topic: Option<String>,

    /// Bearer token for the Context7 API
    #[arg(long, env = "CONTEXT7_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "CONTEXT7_BASE_URL")]
    base_url: Option<String>,

    /// Documentation length budget requested from the API
    #[arg(long, default_value_t = DEFAULT_TOKENS)]
    tokens: u32,

    /// Maximum characters of documentation to print
    #[arg(long, default_value_t = DISPLAY_MAX_CHARS)]
    max_chars: usize,

    /// Log requests and responses to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut config = ClientConfig::default();
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }

    let client = DocsClient::new(config)?;
    let outcome = Pipeline::new(&client)
        .tokens(args.tokens)
        .max_chars(args.max_chars)
        .run(
            &args.library,
            args.topic.as_deref(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await?;

    tracing::debug!(stage = ?outcome.stage(), "pipeline finished");
    Ok(())
}
