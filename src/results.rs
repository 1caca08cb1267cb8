use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How far a page got through fetching and extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Success,
    FetchError,
    ParseError,
}

/// What was extracted from a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL as listed in the input file
    pub url: String,

    /// URL relative references on the page resolve against
    pub base_url: String,

    /// Image reference as written in the page (OpenGraph or first `<img>`)
    pub image_url: Option<String>,

    /// Title of the page (if available)
    pub title: Option<String>,

    /// Description of the page (if available)
    pub description: Option<String>,

    pub status: PageStatus,
}

impl PageResult {
    /// A result with nothing extracted
    pub fn failed(url: &str, status: PageStatus) -> Self {
        Self {
            url: url.to_string(),
            base_url: url.to_string(),
            image_url: None,
            title: None,
            description: None,
            status,
        }
    }
}

/// Terminal state of one input URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UrlOutcome {
    /// Image saved to `path`
    Downloaded { path: PathBuf },
    /// Page fetched but no image found on it
    NoImage,
    FetchFailed { reason: String },
    ParseFailed { reason: String },
    DownloadFailed { reason: String },
}

impl UrlOutcome {
    /// Whether the URL failed at some stage, as opposed to being saved or skipped
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            UrlOutcome::FetchFailed { .. }
                | UrlOutcome::ParseFailed { .. }
                | UrlOutcome::DownloadFailed { .. }
        )
    }
}

/// What the run did with one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlReport {
    pub url: String,
    pub status: PageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub outcome: UrlOutcome,
}

/// Totals for a whole run, plus the per-URL outcomes in input order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub reports: Vec<UrlReport>,
}

impl RunSummary {
    pub fn record(&mut self, page: PageResult, outcome: UrlOutcome) {
        self.processed += 1;
        if outcome.is_failure() {
            self.failed += 1;
        } else if matches!(outcome, UrlOutcome::Downloaded { .. }) {
            self.downloaded += 1;
        } else {
            self.skipped += 1;
        }
        self.reports.push(UrlReport {
            url: page.url,
            status: page.status,
            title: page.title,
            description: page.description,
            outcome,
        });
    }

    /// Paths of every image written during the run
    pub fn saved_paths(&self) -> Vec<&PathBuf> {
        self.reports
            .iter()
            .filter_map(|r| match &r.outcome {
                UrlOutcome::Downloaded { path } => Some(path),
                _ => None,
            })
            .collect()
    }
}
