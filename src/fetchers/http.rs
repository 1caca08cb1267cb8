use crate::config::FetchConfig;
use crate::error::HarvestError;
use crate::fetchers::FetchedPage;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use url::Url;

/// Plain HTTP(S) GET client shared by the page fetch and the image download
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the client with the configured timeouts and `User-Agent`
    pub fn new(config: &FetchConfig) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HarvestError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET a page and read its body as text.
    ///
    /// Invalid URLs, network failures, timeouts and non-2xx answers all come
    /// back as [`HarvestError::Fetch`].
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, HarvestError> {
        let target = parse_http_url(url).map_err(|reason| HarvestError::fetch(url, reason))?;

        let response = self
            .get(&target)
            .await
            .map_err(|e| HarvestError::fetch(url, describe_request_error(&e)))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = content_type(&response);

        let body = response
            .text()
            .await
            .map_err(|e| HarvestError::fetch(url, format!("failed to read body: {e}")))?;

        ::log::debug!(
            "Fetched {} ({} bytes, status {}, content type {:?})",
            final_url,
            body.len(),
            status,
            content_type
        );

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status,
            content_type,
            body,
        })
    }

    /// GET a URL, returning the response only when the status is 2xx
    pub async fn get(&self, url: &Url) -> Result<Response, reqwest::Error> {
        ::log::trace!("GET {}", url);

        self.client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()
    }
}

/// Parse a URL and make sure it is something we can GET
pub fn parse_http_url(url: &str) -> Result<Url, String> {
    let parsed = Url::parse(url).map_err(|e| format!("invalid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(format!("unsupported scheme: {other}")),
    }
}

pub fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Short reason for a failed GET, as recorded in the run summary
pub(crate) fn describe_request_error(e: &reqwest::Error) -> String {
    if let Some(status) = e.status() {
        format!("HTTP {status}")
    } else if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}
