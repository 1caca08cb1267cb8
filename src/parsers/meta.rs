use scraper::{ElementRef, Html, Selector};

/// Values pulled out of a page's `<head>` (and, for the image fallback, its body)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    /// `og:image`, or the first `<img src>` when no OpenGraph image is declared
    pub image: Option<String>,
    /// `og:description`, or `<meta name="description">`
    pub description: Option<String>,
    /// `og:title`, or the `<title>` text
    pub title: Option<String>,
    /// `<base href>`, used to resolve relative references
    pub base_href: Option<String>,
}

impl MetaTags {
    /// True when none of image, description or title was found
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.description.is_none() && self.title.is_none()
    }
}

/// Extracts OpenGraph and fallback meta values from an HTML document.
///
/// Image and description fall back independently of each other. Values are
/// returned as written in the document, only trimmed; relative URLs are left
/// for the caller to resolve.
pub fn extract(html: &str) -> MetaTags {
    let doc = Html::parse_document(html);
    let metas = select(&doc, "meta");

    let image = og_content(&metas, "og:image").or_else(|| first_image_src(&doc));
    let description =
        og_content(&metas, "og:description").or_else(|| named_content(&metas, "description"));
    let title = og_content(&metas, "og:title").or_else(|| title_text(&doc));
    let base_href = select(&doc, "base")
        .into_iter()
        .find_map(|e| non_empty(e.value().attr("href")));

    let tags = MetaTags {
        image,
        description,
        title,
        base_href,
    };

    ::log::debug!(
        "Meta extraction: image={:?} description={} title={}",
        tags.image,
        tags.description.is_some(),
        tags.title.is_some()
    );

    tags
}

fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(e) => {
            ::log::error!("Invalid selector {:?}: {:?}", css, e);
            Vec::new()
        }
    }
}

/// Content of the first `<meta property=key>` with a usable value. Some sites
/// put OpenGraph keys in `name`, so that attribute is accepted as well.
fn og_content(metas: &[ElementRef<'_>], key: &str) -> Option<String> {
    metas
        .iter()
        .filter(|e| {
            let v = e.value();
            attr_is(v.attr("property"), key) || attr_is(v.attr("name"), key)
        })
        .find_map(|e| non_empty(e.value().attr("content")))
}

fn named_content(metas: &[ElementRef<'_>], name: &str) -> Option<String> {
    metas
        .iter()
        .filter(|e| attr_is(e.value().attr("name"), name))
        .find_map(|e| non_empty(e.value().attr("content")))
}

fn first_image_src(doc: &Html) -> Option<String> {
    select(doc, "img")
        .into_iter()
        .find_map(|e| non_empty(e.value().attr("src")))
}

fn title_text(doc: &Html) -> Option<String> {
    select(doc, "title").into_iter().find_map(|e| {
        let text = e.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        (!text.is_empty()).then_some(text)
    })
}

fn attr_is(attr: Option<&str>, expected: &str) -> bool {
    attr.is_some_and(|a| a.trim().eq_ignore_ascii_case(expected))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
