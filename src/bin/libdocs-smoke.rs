//! Manual end-to-end check of search, fetch and format against the live API.

use anyhow::Result;
use clap::Parser;
use libdocs::{ClientConfig, DocsClient, Lookup, QueryParameters, format_for_display};
use std::process::ExitCode;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "libdocs-smoke", about = "Exercise the Context7 client against the live API")]
struct Args {
    /// Bearer token for the Context7 API
    #[arg(long, env = "CONTEXT7_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "CONTEXT7_BASE_URL")]
    base_url: Option<String>,
}

const PREVIEW_CHARS: usize = 500;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    println!("\n🧪 libdocs - Smoke Test\n");

    match run(args).await {
        Ok(()) => {
            print_section("✅ TEST SUMMARY");
            println!("\nAll checks completed. ✅ marks above mean the client is working.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\n❌ ERROR: {e:#}");
            println!("\nTroubleshooting:");
            println!("- Check your internet connection");
            println!("- Verify the API key is valid (--api-key or CONTEXT7_API_KEY)");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = ClientConfig::default();
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    let client = DocsClient::new(config)?;

    test_search(&client).await;
    test_fetch(&client).await;
    test_format(&client).await;
    test_full_workflow(&client).await;
    Ok(())
}

fn print_section(title: &str) {
    println!("\n{}", "=".repeat(80));
    println!("  {title}");
    println!("{}", "=".repeat(80));
}

fn indent(text: &str) -> String {
    format!("   {}", text.replace('\n', "\n   "))
}

async fn test_search(client: &DocsClient) {
    print_section("TEST 1: Search Libraries");

    for query in ["next.js", "react hook form", "supabase", "tailwind"] {
        println!("\n🔍 Searching: {query}");
        match client.search(query).await {
            Lookup::Found(library) => {
                println!("   ✅ Found: {}", library.title);
                println!("   📝 ID: {}", library.id);
                println!("   ⭐ Trust Score: {}", library.trust_score);
                println!("   📚 Snippets: {}", library.total_snippets);
            }
            Lookup::NotFound | Lookup::Failed(_) => println!("   ❌ Not found"),
        }
    }
}

async fn test_fetch(client: &DocsClient) {
    print_section("TEST 2: Fetch Documentation");
    println!("\n📚 Fetching Next.js documentation (topic: app router)...");

    let Some(library) = client.search("next.js").await.found() else {
        println!("❌ Could not find Next.js");
        return;
    };
    println!("   Found: {} ({})", library.title, library.id);

    let params = QueryParameters::new(Some("app router"), 3000);
    match client.fetch_docs(&library.id, &params).await {
        Lookup::Found(docs) => {
            println!("   ✅ Retrieved {} characters of documentation", docs.chars().count());
            println!("\n   Preview of documentation:");
            println!("   {}", "-".repeat(76));
            let preview: String = docs.chars().take(PREVIEW_CHARS).collect();
            println!("{}", indent(&preview));
            println!("   {}", "-".repeat(76));
        }
        Lookup::NotFound | Lookup::Failed(_) => println!("   ❌ Failed to fetch documentation"),
    }
}

async fn test_format(client: &DocsClient) {
    print_section("TEST 3: Format Documentation");
    println!("\n📝 Testing format with React Hook Form...");

    let Some(library) = client.search("react hook form").await.found() else {
        println!("❌ Could not find React Hook Form");
        return;
    };

    let params = QueryParameters::new(None, 2000);
    match client.fetch_docs(&library.id, &params).await {
        Lookup::Found(docs) => {
            let formatted = format_for_display(&docs, PREVIEW_CHARS);
            println!("\n   Formatted output preview:");
            println!("   {}", "-".repeat(76));
            let preview: String = formatted.chars().take(PREVIEW_CHARS).collect();
            println!("{}", indent(&preview));
            println!("   {}", "-".repeat(76));
            println!(
                "   ✅ Full formatted output: {} characters",
                formatted.chars().count()
            );
        }
        Lookup::NotFound | Lookup::Failed(_) => println!("   ❌ No docs to format"),
    }
}

async fn test_full_workflow(client: &DocsClient) {
    print_section("TEST 4: Complete Workflow");

    for (name, topic) in [("zustand", "store management"), ("supabase", "authentication")] {
        println!("\n🧪 Testing: {name} (topic: {topic})");

        let Some(library) = client.search(name).await.found() else {
            println!("   ❌ Search failed for {name}");
            continue;
        };
        println!("   ✅ Found: {}", library.title);

        let params = QueryParameters::new(Some(topic), 2000);
        let Some(docs) = client.fetch_docs(&library.id, &params).await.found() else {
            println!("   ❌ Fetch failed");
            continue;
        };
        println!("   ✅ Fetched {} characters", docs.chars().count());

        let formatted = format_for_display(&docs, PREVIEW_CHARS);
        println!("   ✅ Formatted: {} characters", formatted.chars().count());
    }
}
