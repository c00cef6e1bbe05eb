//! Filter API operations

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use log::{debug, error, info, warn};

use crate::config::api;
use crate::error::Result;
use crate::jira::JiraClient;

use super::models::{FilterDetail, FilterSearchPage, FilterSummary};

impl JiraClient {
    /// List all saved filters via the paginated search endpoint.
    ///
    /// Pages are requested at increasing offsets until the server reports the
    /// last page or returns an empty page. Any transport error, non-success
    /// status, or malformed page stops the loop and returns whatever has
    /// accumulated so far; listing failures never abort the run. `max_pages`
    /// bounds a server that never signals a last page.
    pub async fn search_filters(&self, max_pages: u32) -> Vec<FilterSummary> {
        let mut filters = Vec::new();
        let mut start_at = 0u32;
        let mut pages = 0u32;

        loop {
            if pages >= max_pages {
                warn!(
                    "Stopping filter listing after {} pages without a last-page signal",
                    pages
                );
                break;
            }

            match self.fetch_filter_page(start_at).await {
                Ok(page) => {
                    let is_last = page.is_last;
                    let page_empty = page.values.is_empty();
                    filters.extend(page.values);
                    pages += 1;
                    start_at += api::PAGE_SIZE;
                    if is_last || page_empty {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to fetch filters: {}", e);
                    break;
                }
            }
        }

        debug!("Listed {} filters across {} page(s)", filters.len(), pages);
        filters
    }

    /// Fetch one page of filter summaries
    async fn fetch_filter_page(&self, start_at: u32) -> Result<FilterSearchPage> {
        let url = format!(
            "{}?startAt={}&maxResults={}",
            self.api_url("filter/search"),
            start_at,
            api::PAGE_SIZE
        );
        info!("Fetching filters from: {}", url);

        let response = self.get(&url).send().await?;
        debug!("Response status code: {}", response.status());

        self.parse_api_response(response, "filters").await
    }

    /// Fetch a single filter's detail record.
    ///
    /// Returns `None` on any failure so the filter is excluded from the
    /// report instead of aborting the run.
    pub async fn get_filter(&self, id: &str) -> Option<FilterDetail> {
        match self.fetch_filter_detail(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                error!("Failed to fetch details for filter '{}': {}", id, e);
                None
            }
        }
    }

    async fn fetch_filter_detail(&self, id: &str) -> Result<FilterDetail> {
        let url = self.api_url(&format!("filter/{}", id));
        debug!("Fetching filter details from: {}", url);

        let response = self.get(&url).send().await?;
        debug!("Response status code: {}", response.status());

        self.parse_api_response(response, &format!("filter '{}'", id))
            .await
    }

    /// Fetch details for all listed filters through a bounded worker pool.
    ///
    /// Up to [`api::MAX_CONCURRENT_DETAIL_REQUESTS`] requests are in flight
    /// at once. Results are collected in completion order, so row order in
    /// the report does not correlate with listing order. Failed fetches are
    /// dropped. The progress bar, when present, ticks once per completed
    /// request.
    pub async fn fetch_filter_details(
        &self,
        filters: &[FilterSummary],
        progress: Option<&ProgressBar>,
    ) -> Vec<FilterDetail> {
        let results: Vec<Option<FilterDetail>> = stream::iter(filters.iter().map(|filter| {
            async move {
                let detail = self.get_filter(&filter.id).await;
                if let Some(bar) = progress {
                    bar.inc(1);
                }
                detail
            }
        }))
        .buffer_unordered(api::MAX_CONCURRENT_DETAIL_REQUESTS)
        .collect()
        .await;

        results.into_iter().flatten().collect()
    }
}
