use crate::downloader::ImageDownloader;
use crate::fetchers::HttpFetcher;
use crate::parsers;
use crate::results::{PageResult, PageStatus, RunSummary, UrlOutcome};
use std::path::PathBuf;

/// Runs fetch → extract → download for each URL, one at a time.
///
/// A failure on one URL is logged and recorded, and the next URL is
/// processed as usual.
pub struct Pipeline {
    fetcher: HttpFetcher,
    downloader: ImageDownloader,
    write_metadata: bool,
}

impl Pipeline {
    pub fn new(fetcher: HttpFetcher, output_dir: impl Into<PathBuf>) -> Self {
        let downloader = ImageDownloader::new(fetcher.clone(), output_dir);
        Self {
            fetcher,
            downloader,
            write_metadata: false,
        }
    }

    /// Also write a `<stem>.txt` metadata file for every fetched page
    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.write_metadata = enabled;
        self
    }

    pub async fn run(&self, urls: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();
        let start_time = std::time::Instant::now();

        for (i, url) in urls.iter().enumerate() {
            ::log::info!("Processing {} ({}/{})", url, i + 1, urls.len());
            let (page, outcome) = self.process_url(url).await;
            summary.record(page, outcome);
        }

        ::log::info!(
            "Processed {} URLs in {:.2} seconds: {} downloaded, {} skipped, {} failed",
            summary.processed,
            start_time.elapsed().as_secs_f64(),
            summary.downloaded,
            summary.skipped,
            summary.failed
        );

        summary
    }

    /// Process a single URL through every stage, returning what was
    /// extracted along with how far it got
    pub async fn process_url(&self, url: &str) -> (PageResult, UrlOutcome) {
        let page = match self.fetcher.fetch_page(url).await {
            Ok(page) => page,
            Err(e) => {
                ::log::warn!("{}", e);
                let outcome = UrlOutcome::FetchFailed {
                    reason: e.to_string(),
                };
                return (PageResult::failed(url, PageStatus::FetchError), outcome);
            }
        };

        let result = parsers::page_result(&page);
        if result.status == PageStatus::ParseError {
            let reason = format!(
                "{} is not an HTML document (content type {})",
                page.final_url,
                page.content_type.as_deref().unwrap_or("unknown")
            );
            ::log::warn!("{}", reason);
            return (result, UrlOutcome::ParseFailed { reason });
        }

        if self.write_metadata {
            match self.downloader.write_metadata(&result).await {
                Ok(path) => ::log::info!("Saved metadata for {} to {}", url, path.display()),
                Err(e) => ::log::warn!("{}", e),
            }
        }

        if result.image_url.is_none() {
            ::log::info!("No image found for {}", url);
            return (result, UrlOutcome::NoImage);
        }

        let outcome = match self.downloader.download(&result).await {
            Ok(path) => {
                ::log::info!("Saved image for {} to {}", url, path.display());
                UrlOutcome::Downloaded { path }
            }
            Err(e) => {
                ::log::warn!("{}", e);
                UrlOutcome::DownloadFailed {
                    reason: e.to_string(),
                }
            }
        };

        (result, outcome)
    }
}
