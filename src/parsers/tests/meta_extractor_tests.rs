use crate::parsers::meta::{self, MetaTags};

#[cfg(test)]
mod opengraph_tests {
    use super::*;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>  Fallback   title </title>
  <meta property="og:title" content="Launch day">
  <meta property="og:image" content="https://cdn.example.com/img/launch.png">
  <meta property="og:description" content="We shipped the thing.">
  <meta name="description" content="Plain description">
</head>
<body><img src="/static/logo.svg"></body>
</html>"#;

    #[test]
    fn test_fixture_values_returned_exactly() {
        let tags = meta::extract(ARTICLE);
        assert_eq!(
            tags.image.as_deref(),
            Some("https://cdn.example.com/img/launch.png")
        );
        assert_eq!(tags.description.as_deref(), Some("We shipped the thing."));
        assert_eq!(tags.title.as_deref(), Some("Launch day"));
        assert_eq!(tags.base_href, None);
    }

    #[test]
    fn test_og_image_wins_over_img_elements() {
        assert_eq!(
            meta::extract(ARTICLE).image.as_deref(),
            Some("https://cdn.example.com/img/launch.png")
        );
    }

    #[test]
    fn test_relative_og_image_left_unresolved() {
        let html = r#"<html><head><meta property="og:image" content="/images/cover.jpg"></head></html>"#;
        assert_eq!(meta::extract(html).image.as_deref(), Some("/images/cover.jpg"));
    }

    #[test]
    fn test_og_key_in_name_attribute() {
        let html = r#"<html><head><meta name="og:image" content="https://x.example/a.png"></head></html>"#;
        assert_eq!(meta::extract(html).image.as_deref(), Some("https://x.example/a.png"));
    }

    #[test]
    fn test_empty_og_image_skipped() {
        let html = r#"<html><head>
            <meta property="og:image" content="   ">
            <meta property="og:image" content="https://x.example/second.png">
        </head></html>"#;
        assert_eq!(
            meta::extract(html).image.as_deref(),
            Some("https://x.example/second.png")
        );
    }

    #[test]
    fn test_entities_in_content_decoded() {
        let html = r#"<html><head><meta property="og:description" content="Fish &amp; chips"></head></html>"#;
        assert_eq!(
            meta::extract(html).description.as_deref(),
            Some("Fish & chips")
        );
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_first_img_used_without_og_image() {
        let html = r#"<html><body>
            <p>intro</p>
            <img alt="no source">
            <img src="photos/first.jpg">
            <img src="photos/second.jpg">
        </body></html>"#;
        assert_eq!(meta::extract(html).image.as_deref(), Some("photos/first.jpg"));
    }

    #[test]
    fn test_meta_description_fallback() {
        let html = r#"<html><head><meta name="Description" content=" Plain text summary "></head></html>"#;
        let tags = meta::extract(html);
        assert_eq!(tags.description.as_deref(), Some("Plain text summary"));
        assert_eq!(tags.image, None);
    }

    #[test]
    fn test_fallbacks_are_independent() {
        // OpenGraph description with no OpenGraph image still falls back to <img>
        let html = r#"<html><head><meta property="og:description" content="OG text"></head>
            <body><img src="/hero.webp"></body></html>"#;
        let tags = meta::extract(html);
        assert_eq!(tags.description.as_deref(), Some("OG text"));
        assert_eq!(tags.image.as_deref(), Some("/hero.webp"));
    }

    #[test]
    fn test_title_element_fallback() {
        let html = "<html><head><title>\n  My   Page\n</title></head><body></body></html>";
        assert_eq!(meta::extract(html).title.as_deref(), Some("My Page"));
    }

    #[test]
    fn test_base_href_captured() {
        let html = r#"<html><head><base href="https://static.example.com/assets/"></head>
            <body><img src="a.png"></body></html>"#;
        let tags = meta::extract(html);
        assert_eq!(
            tags.base_href.as_deref(),
            Some("https://static.example.com/assets/")
        );
        assert_eq!(tags.image.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_nothing_found_is_empty() {
        let tags = meta::extract("<html><body><p>Just words.</p></body></html>");
        assert!(tags.is_empty());
        assert_eq!(tags, MetaTags::default());
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        let tags = meta::extract("<<<meta property=og:image content=>>> </img");
        assert_eq!(tags.image, None);
    }
}
