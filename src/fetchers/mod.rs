pub mod http;

pub use http::HttpFetcher;

/// A page that answered a GET with a 2xx status
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,
    /// URL that finally answered, after redirects
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}
