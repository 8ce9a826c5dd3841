use std::time::Duration;

use gameyaml_engine::{FailureKind, FetchError, FetchSettings, FetchedPage, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The fetcher is blocking, so it runs off the async test runtime.
async fn fetch_blocking(settings: FetchSettings, url: String) -> Result<FetchedPage, FetchError> {
    tokio::task::spawn_blocking(move || ReqwestFetcher::new(settings).fetch(&url))
        .await
        .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_returns_decoded_page_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/game"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"<p>caf\xe9</p>".to_vec(), "text/html; charset=ISO-8859-1"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/game", server.uri());
    let page = fetch_blocking(FetchSettings::default(), url.clone())
        .await
        .expect("fetch ok");

    assert_eq!(page.text, "<p>café</p>");
    assert_eq!(page.metadata.original_url, url);
    assert_eq!(page.metadata.final_url, url);
    assert_eq!(page.metadata.byte_len, 11);
    assert!(page
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/html"));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = fetch_blocking(FetchSettings::default(), url)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_times_out_without_retrying() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_raw("<html>slow</html>", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let url = format!("{}/slow", server.uri());
    let err = fetch_blocking(settings, url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("01234567890", "text/html"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let url = format!("{}/large", server.uri());
    let err = fetch_blocking(settings, url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_rejects_non_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let url = format!("{}/data", server.uri());
    let err = fetch_blocking(FetchSettings::default(), url)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "application/json".to_string()
        }
    );
}

#[test]
fn fetcher_rejects_invalid_url() {
    let err = ReqwestFetcher::new(FetchSettings::default())
        .fetch("not a url")
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
