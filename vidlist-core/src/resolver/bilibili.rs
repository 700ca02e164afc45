//! Bilibili title resolution by scraping the watch page

use std::sync::LazyLock;

use reqwest::{header, Client, StatusCode};
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{Error, Result};

const REFERER: &str = "https://www.bilibili.com/";
const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Branding suffix bilibili appends to the page `<title>`.
const TITLE_SUFFIX: &str = "_哔哩哔哩_bilibili";

// Selectors are compile-time constants; Selector::parse cannot fail on them.
static SEL_OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("invalid og:title selector")
});
static SEL_H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("invalid h1 selector"));
static SEL_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("invalid title selector"));

/// Fetch the watch page and scrape a title out of it.
pub(super) async fn resolve(client: &Client, base: &str, bvid: &str) -> Result<String> {
    let page_url = format!("{base}/video/{bvid}");
    debug!("Fetching bilibili video page: {page_url}");

    let response = client
        .get(&page_url)
        .header(header::ACCEPT, ACCEPT_HTML)
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
        .header(header::REFERER, REFERER)
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        debug!("Bilibili page fetch returned {}", response.status());
        return Err(Error::FetchFailed("Could not fetch Bilibili video".to_string()));
    }

    let html = response.text().await?;
    extract_title(&html).ok_or(Error::CouldNotExtractTitle)
}

/// Scrape a title from watch-page HTML.
///
/// Fallback order: the `og:title` meta content, the first `<h1>`, then the
/// `<title>` element with the branding suffix removed. Each step must yield
/// a non-empty string to win.
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Some(element) = document.select(&SEL_OG_TITLE).next() {
        if let Some(content) = element.value().attr("content") {
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    if let Some(element) = document.select(&SEL_H1).next() {
        let text = element.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    if let Some(element) = document.select(&SEL_TITLE).next() {
        let text = element.text().collect::<String>().replace(TITLE_SUFFIX, "");
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_og_title_wins_over_everything() {
        let html = r#"
            <html><head>
                <meta property="og:title" content="Foo">
                <title>Baz_哔哩哔哩_bilibili</title>
            </head><body><h1>Bar</h1></body></html>
        "#;
        assert_eq!(extract_title(html).as_deref(), Some("Foo"));
    }

    #[test]
    fn test_h1_when_no_og_title() {
        let html = r#"
            <html><head><title>Baz_哔哩哔哩_bilibili</title></head>
            <body><h1> Bar </h1></body></html>
        "#;
        assert_eq!(extract_title(html).as_deref(), Some("Bar"));
    }

    #[test]
    fn test_title_tag_with_branding_suffix_removed() {
        let html = "<html><head><title>Baz_哔哩哔哩_bilibili</title></head><body></body></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Baz"));
    }

    #[test]
    fn test_empty_og_title_falls_through() {
        let html = r#"
            <html><head><meta property="og:title" content=""></head>
            <body><h1>Bar</h1></body></html>
        "#;
        assert_eq!(extract_title(html).as_deref(), Some("Bar"));
    }

    #[test]
    fn test_empty_h1_falls_through_to_title() {
        let html = r#"
            <html><head><title>Baz_哔哩哔哩_bilibili</title></head>
            <body><h1>  </h1></body></html>
        "#;
        assert_eq!(extract_title(html).as_deref(), Some("Baz"));
    }

    #[test]
    fn test_no_usable_title() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert_eq!(extract_title(html), None);
    }

    mod fetch {
        use super::super::*;
        use crate::config::ResolverConfig;
        use crate::models::Platform;
        use crate::resolver::TitleResolver;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn test_config(server_uri: &str) -> ResolverConfig {
            ResolverConfig {
                bilibili_base: server_uri.to_string(),
                ..ResolverConfig::default()
            }
        }

        #[tokio::test]
        async fn test_scrapes_fetched_page() {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/video/BV1xx411c7XZ"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"<html><head><meta property="og:title" content="Foo"></head></html>"#,
                ))
                .mount(&server)
                .await;

            let resolver = TitleResolver::new(test_config(&server.uri())).expect("resolver");
            let title = resolver
                .resolve(Platform::Bilibili, "BV1xx411c7XZ")
                .await
                .expect("title");
            assert_eq!(title, "Foo");
        }

        #[tokio::test]
        async fn test_non_200_is_fetch_failed() {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/video/BV1xx411c7XZ"))
                .respond_with(ResponseTemplate::new(403))
                .mount(&server)
                .await;

            let resolver = TitleResolver::new(test_config(&server.uri())).expect("resolver");
            let err = resolver
                .resolve(Platform::Bilibili, "BV1xx411c7XZ")
                .await
                .expect_err("fetch should fail");
            assert!(matches!(err, Error::FetchFailed(_)));
        }
    }
}
