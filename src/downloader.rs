use crate::error::HarvestError;
use crate::fetchers::HttpFetcher;
use crate::fetchers::http::{content_type, describe_request_error, parse_http_url};
use crate::results::PageResult;
use crate::utils;
use reqwest::Response;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Saves page images under an output directory, one file per page URL
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    fetcher: HttpFetcher,
    output_dir: PathBuf,
}

impl ImageDownloader {
    /// Downloader writing into `output_dir`, which must already exist
    pub fn new(fetcher: HttpFetcher, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
        }
    }

    /// Download the page's image to `<output_dir>/<stem>.<ext>`.
    ///
    /// The stem comes from the page URL, so a re-run overwrites the file
    /// written last time, and a file left under another image extension by an
    /// earlier run is removed. The body goes to a `.part` file first and is
    /// renamed into place once complete.
    pub async fn download(&self, page: &PageResult) -> Result<PathBuf, HarvestError> {
        let image_ref = page
            .image_url
            .as_deref()
            .ok_or_else(|| HarvestError::download(&page.url, "page has no image"))?;

        let image_url = resolve_image_url(&page.base_url, image_ref)?;
        ::log::info!("Downloading image {} for {}", image_url, page.url);

        let response = self
            .fetcher
            .get(&image_url)
            .await
            .map_err(|e| {
                HarvestError::download(image_url.as_str(), describe_request_error(&e))
            })?;

        let ext = utils::image_extension(&image_url, content_type(&response).as_deref());
        let stem = utils::file_stem(&page.url);
        let path = self.output_dir.join(format!("{stem}.{ext}"));
        let part = self.output_dir.join(format!(".{stem}.{ext}.part"));

        match write_body(response, &part).await {
            Ok(0) => {
                remove_partial(&part).await;
                Err(HarvestError::download(
                    image_url.as_str(),
                    "empty response body",
                ))
            }
            Ok(bytes) => {
                tokio::fs::rename(&part, &path).await.map_err(|e| {
                    HarvestError::download(
                        image_url.as_str(),
                        format!("cannot move image to {}: {e}", path.display()),
                    )
                })?;
                ::log::debug!("Wrote {} bytes to {}", bytes, path.display());
                self.remove_stale(&stem, &ext).await;
                Ok(path)
            }
            Err(e) => {
                remove_partial(&part).await;
                Err(HarvestError::download(image_url.as_str(), e))
            }
        }
    }

    /// Delete `<stem>.<other>` for every image extension but `ext`, so a page
    /// whose image changed type keeps a single file
    async fn remove_stale(&self, stem: &str, ext: &str) {
        for other in utils::IMAGE_EXTENSIONS.iter().filter(|&&other| other != ext) {
            let stale = self.output_dir.join(format!("{stem}.{other}"));
            match tokio::fs::remove_file(&stale).await {
                Ok(()) => ::log::info!("Removed stale image {}", stale.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => ::log::debug!("Could not remove {}: {}", stale.display(), e),
            }
        }
    }

    /// Write `<stem>.txt` holding the page URL, title and description
    pub async fn write_metadata(&self, page: &PageResult) -> Result<PathBuf, HarvestError> {
        let stem = utils::file_stem(&page.url);
        let path = self.output_dir.join(format!("{stem}.txt"));

        tokio::fs::write(&path, metadata_text(page))
            .await
            .map_err(|e| {
                HarvestError::download(
                    &page.url,
                    format!("cannot write metadata to {}: {e}", path.display()),
                )
            })?;

        Ok(path)
    }
}

/// Resolve an image reference from a page against the page's base URL
pub fn resolve_image_url(base_url: &str, image_ref: &str) -> Result<Url, HarvestError> {
    let resolved = utils::resolve_url(base_url, image_ref).map_err(|e| {
        HarvestError::download(image_ref, format!("cannot resolve against {base_url}: {e}"))
    })?;

    parse_http_url(resolved.as_str()).map_err(|reason| HarvestError::download(image_ref, reason))
}

/// Sidecar contents: the page URL, title and description, `Not found` when missing
pub fn metadata_text(page: &PageResult) -> String {
    format!(
        "URL: {}\n\nTitle: {}\n\nDescription: {}\n",
        page.url,
        page.title.as_deref().unwrap_or("Not found"),
        page.description.as_deref().unwrap_or("Not found"),
    )
}

#[derive(Debug, Error)]
enum BodyError {
    #[error("failed to read image body: {0}")]
    Read(#[from] reqwest::Error),
    #[error("cannot write image file: {0}")]
    Write(#[from] std::io::Error),
}

async fn write_body(mut response: Response, part: &Path) -> Result<u64, BodyError> {
    let mut file = tokio::fs::File::create(part).await?;

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}

async fn remove_partial(part: &Path) {
    if let Err(e) = tokio::fs::remove_file(part).await {
        ::log::debug!("Could not remove {}: {}", part.display(), e);
    }
}
