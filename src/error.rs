use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while harvesting page images.
///
/// `NotFound`, `Input`, `Output` and `Config` abort the whole run. `Fetch`
/// and `Download` are scoped to a single URL and only recorded in the summary.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory {} is unusable: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("download failed for {url}: {reason}")]
    Download { url: String, reason: String },
}

impl HarvestError {
    pub(crate) fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        HarvestError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn download(url: impl Into<String>, reason: impl ToString) -> Self {
        HarvestError::Download {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
