// Re-export modules
pub mod config;
pub mod downloader;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod sources;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use error::HarvestError;
pub use pipeline::Pipeline;
pub use results::{PageResult, PageStatus, RunSummary, UrlOutcome, UrlReport};

use fetchers::HttpFetcher;
use std::path::PathBuf;

/// Main builder for a harvest run
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new Harvest builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, HarvestError> {
        let config = HarvestConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the file the URLs are read from
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    /// Set the directory images are written to
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the `User-Agent` header sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Write `<stem>.txt` metadata files next to the images
    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.config.write_metadata = enabled;
        self
    }

    /// Settings the run will use
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Read the URL list, prepare the output directory and process every URL.
    ///
    /// Only run-level problems (missing input file, unusable output
    /// directory, bad settings) are returned as errors; per-URL failures are
    /// in the summary.
    pub async fn run(self) -> Result<RunSummary, HarvestError> {
        self.config.validate()?;

        let urls = sources::read_urls(&self.config.input)?;

        let output_dir = &self.config.output_dir;
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| HarvestError::Output {
                path: output_dir.clone(),
                source: e,
            })?;

        let fetcher = HttpFetcher::new(&self.config.fetch_config())?;
        let pipeline =
            Pipeline::new(fetcher, output_dir.clone()).with_metadata(self.config.write_metadata);

        Ok(pipeline.run(&urls).await)
    }
}
