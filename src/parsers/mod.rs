pub mod meta;

#[cfg(test)]
mod tests;

use crate::fetchers::FetchedPage;
use crate::results::{PageResult, PageStatus};
use crate::utils;

/// Kind of document a fetched body holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// HTML or XHTML document
    Html,
    /// Anything we can't pull meta tags from (images, PDFs, plain text, ...)
    Other,
}

impl ParserType {
    /// Classifies a response by its `Content-Type`, falling back to the URL
    /// when the server didn't send one
    pub fn from_content_type(content_type: Option<&str>, url: &str) -> Self {
        let Some(content_type) = content_type else {
            return Self::from_url(url);
        };

        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime.is_empty() {
            Self::from_url(url)
        } else if mime == "text/html" || mime == "application/xhtml+xml" {
            ParserType::Html
        } else {
            ::log::debug!("Classifying {} as Other ({})", url, mime);
            ParserType::Other
        }
    }

    /// Classifies a URL by its path extension
    pub fn from_url(url: &str) -> Self {
        let path = url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let non_html = [
            ".txt", ".yaml", ".yml", ".json", ".xml", ".pdf", ".jpg", ".jpeg", ".png", ".gif",
            ".webp", ".svg", ".css", ".js", ".zip",
        ];
        if non_html.iter().any(|ext| path.ends_with(ext)) {
            ::log::debug!("Classifying as Other: {}", url);
            ParserType::Other
        } else {
            ParserType::Html
        }
    }
}

/// Builds the page result for a fetched document.
///
/// The base URL used later to resolve relative image references is the
/// final (post-redirect) URL, adjusted by the document's `<base href>`.
pub fn page_result(page: &FetchedPage) -> PageResult {
    let parser_type = ParserType::from_content_type(page.content_type.as_deref(), &page.final_url);
    if parser_type != ParserType::Html {
        return PageResult::failed(&page.url, PageStatus::ParseError);
    }

    let tags = meta::extract(&page.body);
    if tags.is_empty() {
        ::log::debug!("No meta tags or images found on {}", page.final_url);
    }

    let base_url = match tags.base_href.as_deref() {
        Some(href) => match utils::resolve_url(&page.final_url, href) {
            Ok(base) => base.to_string(),
            Err(e) => {
                ::log::debug!("Ignoring unusable <base href=\"{}\">: {}", href, e);
                page.final_url.clone()
            }
        },
        None => page.final_url.clone(),
    };

    PageResult {
        url: page.url.clone(),
        base_url,
        image_url: tags.image,
        title: tags.title,
        description: tags.description,
        status: PageStatus::Success,
    }
}
