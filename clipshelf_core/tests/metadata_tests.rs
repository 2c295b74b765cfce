use clipshelf_core::metadata::{MetadataOutcome, MetadataResolver, DEFAULT_PLACEHOLDER};

fn resolver_against(server: &mockito::ServerGuard) -> MetadataResolver {
    MetadataResolver::new()
        .unwrap()
        .with_endpoint(format!("{}/oembed", server.url()))
}

#[tokio::test]
async fn test_oembed_success_resolves_full_record() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/oembed")
        .match_query(mockito::Matcher::UrlEncoded(
            "format".into(),
            "json".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Never Gonna Give You Up",
                "author_name": "Rick Astley",
                "author_url": "https://www.youtube.com/@RickAstleyYT"
            }"#,
        )
        .create_async()
        .await;

    let resolver = resolver_against(&server);
    let outcome = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    mock.assert_async().await;
    match outcome {
        MetadataOutcome::Resolved(meta) => {
            assert_eq!(meta.title, "Never Gonna Give You Up");
            assert_eq!(meta.channel_name, "Rick Astley");
            assert_eq!(meta.channel_url, "https://www.youtube.com/@RickAstleyYT");
            assert_eq!(
                meta.thumbnail_url,
                "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
            );
        }
        other => panic!("expected Resolved, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oembed_404_is_fetch_failed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/oembed")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let resolver = resolver_against(&server);
    let outcome = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    mock.assert_async().await;
    // A failed fetch is a distinct variant, not a record of empty strings
    assert_eq!(outcome, MetadataOutcome::FetchFailed);
}

#[tokio::test]
async fn test_oembed_bad_json_is_fetch_failed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/oembed")
        .with_status(200)
        .with_body("<html>surprise</html>")
        .create_async()
        .await;

    let resolver = resolver_against(&server);
    let outcome = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    assert_eq!(outcome, MetadataOutcome::FetchFailed);
}

#[tokio::test]
async fn test_facebook_requires_manual_entry_without_network() {
    let mut server = mockito::Server::new_async().await;
    // Expect zero hits: the Facebook path must not touch the endpoint
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resolver = resolver_against(&server);
    let outcome = resolver
        .resolve("https://www.facebook.com/somepage/videos/1234567890")
        .await;

    mock.assert_async().await;
    match outcome {
        MetadataOutcome::ManualEntryRequired(meta) => {
            assert_eq!(meta.title, "");
            assert_eq!(meta.channel_name, "");
            assert_eq!(meta.channel_url, "");
            assert_eq!(meta.thumbnail_url, DEFAULT_PLACEHOLDER);
        }
        other => panic!("expected ManualEntryRequired, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unrecognized_url_resolves_to_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resolver = resolver_against(&server);
    assert_eq!(
        resolver.resolve("https://example.com").await,
        MetadataOutcome::Unrecognized
    );
    assert_eq!(
        resolver.resolve("not a url").await,
        MetadataOutcome::Unrecognized
    );

    mock.assert_async().await;
}
