use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use apogee::api::SpaceflightClient;
use apogee::core::config;
use apogee::core::store::{ArticleStore, FetchOutcome};

#[derive(Parser)]
#[command(name = "apogee", about = "Spaceflight news reader")]
struct Args {
    /// Number of pages to fetch before printing
    #[arg(short = 'n', long, default_value_t = 1)]
    pages: usize,

    /// Articles per page (overrides config)
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Articles endpoint (overrides config)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to apogee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("apogee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; continuing with defaults");
        config::ApogeeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.page_size, args.base_url.as_deref());

    log::info!(
        "Apogee starting up: endpoint={}, page_size={}",
        resolved.base_url,
        resolved.page_size
    );

    let source = Arc::new(SpaceflightClient::new(Some(resolved.base_url.clone())));
    let mut store = ArticleStore::new(source, resolved.page_size);

    for _ in 0..args.pages {
        match store.fetch_next_page().await {
            // End of data: the server answered with an empty batch.
            FetchOutcome::Appended(0) => break,
            FetchOutcome::Appended(_) => {}
            // Failures are logged; to the reader they look like "no more data".
            FetchOutcome::Failed(_) => break,
        }
    }

    render_listing(&store);
}

/// Plain-text list view: publication date, source name, title, link.
fn render_listing(store: &ArticleStore) {
    if store.articles.is_empty() {
        println!("No articles.");
        return;
    }
    for article in &store.articles {
        println!(
            "{}  {:<18}  {}",
            article.publication_date.format("%Y-%m-%d"),
            article.news_site,
            article.title
        );
        println!("{:32}{}", "", article.url);
    }
    println!();
    println!(
        "{} article(s) across {} page(s)",
        store.articles.len(),
        store.page
    );
}
