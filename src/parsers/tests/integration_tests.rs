use crate::fetchers::FetchedPage;
use crate::parsers::{ParserType, page_result};
use crate::results::PageStatus;

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(url: &str, final_url: &str, content_type: Option<&str>, body: &str) -> FetchedPage {
        FetchedPage {
            url: url.to_string(),
            final_url: final_url.to_string(),
            status: 200,
            content_type: content_type.map(|s| s.to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_page_result_from_html() {
        let page = fetched(
            "https://example.org/post",
            "https://example.org/post",
            Some("text/html; charset=utf-8"),
            r#"<html><head>
                <meta property="og:image" content="/cover.png">
                <meta property="og:description" content="About the post">
            </head></html>"#,
        );
        let result = page_result(&page);
        assert_eq!(result.status, PageStatus::Success);
        assert_eq!(result.url, "https://example.org/post");
        assert_eq!(result.image_url.as_deref(), Some("/cover.png"));
        assert_eq!(result.description.as_deref(), Some("About the post"));
        assert_eq!(result.base_url, "https://example.org/post");
    }

    #[test]
    fn test_base_url_follows_redirect_and_base_href() {
        let page = fetched(
            "http://example.org/old",
            "https://www.example.org/new/page",
            Some("text/html"),
            r#"<html><head><base href="/assets/"></head><body><img src="a.png"></body></html>"#,
        );
        let result = page_result(&page);
        assert_eq!(result.url, "http://example.org/old");
        assert_eq!(result.base_url, "https://www.example.org/assets/");
    }

    #[test]
    fn test_non_html_is_parse_error() {
        let page = fetched(
            "https://example.org/feed",
            "https://example.org/feed",
            Some("application/json"),
            r#"{"og:image": "nope"}"#,
        );
        let result = page_result(&page);
        assert_eq!(result.status, PageStatus::ParseError);
        assert_eq!(result.image_url, None);
        assert_eq!(result.description, None);
    }

    #[test]
    fn test_page_without_tags_is_still_success() {
        let page = fetched(
            "https://example.org/",
            "https://example.org/",
            None,
            "<html><body>nothing here</body></html>",
        );
        let result = page_result(&page);
        assert_eq!(result.status, PageStatus::Success);
        assert_eq!(result.image_url, None);
    }

    #[test]
    fn test_content_type_classification() {
        let cases = [
            (Some("text/html"), "https://a.example/x", ParserType::Html),
            (Some("TEXT/HTML; charset=ISO-8859-1"), "https://a.example/x", ParserType::Html),
            (Some("application/xhtml+xml"), "https://a.example/x", ParserType::Html),
            (Some("image/png"), "https://a.example/x", ParserType::Other),
            (Some("text/plain"), "https://a.example/x.html", ParserType::Other),
            (None, "https://a.example/page", ParserType::Html),
            (None, "https://a.example/photo.JPG?w=200", ParserType::Other),
            (Some(""), "https://a.example/doc.pdf", ParserType::Other),
        ];

        for (content_type, url, expected) in cases {
            assert_eq!(
                ParserType::from_content_type(content_type, url),
                expected,
                "{:?} / {} should classify as {:?}",
                content_type,
                url,
                expected
            );
        }
    }
}
