//! Jira filter permission exporter - Main entry point

use clap::Parser;
use log::{info, warn};

use jfctl::ui::{create_progress_bar, finish_progress_bar};
use jfctl::{build_rows, write_report, Cli, Credentials, JiraClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging once at process start
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting Jira filter export v{}", env!("CARGO_PKG_VERSION"));

    let credentials = Credentials::resolve(&cli)?;
    info!("Using instance type: {}", credentials.instance);
    info!("Using base URL: {}", credentials.base_url);
    info!("Using username: {}", credentials.username);

    let client = JiraClient::new(&credentials, cli.timeout);

    let filters = client.search_filters(cli.max_pages).await;
    if filters.is_empty() {
        warn!("No filters found.");
        return Ok(());
    }
    info!("Found {} filters", filters.len());

    let bar = create_progress_bar(
        filters.len() as u64,
        "Fetching filter details",
        cli.quiet,
    );
    let details = client.fetch_filter_details(&filters, bar.as_ref()).await;
    finish_progress_bar(bar, "Filter details fetched");

    let rows = build_rows(&details);
    if write_report(&rows, &cli.output)? {
        println!("Filter details saved to {}", cli.output.display());
    }

    Ok(())
}
