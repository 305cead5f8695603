use shared::{FetchError, HnClient, StoryClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn top_stories_decodes_ordered_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[101, 202, 303]", "application/json"))
        .mount(&server)
        .await;

    let client = HnClient::with_base_url(&server.uri()).unwrap();
    let ids = client.top_stories().await.unwrap();
    assert_eq!(ids, vec![101, 202, 303]);
}

#[tokio::test]
async fn top_stories_surfaces_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HnClient::with_base_url(&server.uri()).unwrap();
    let err = client.top_stories().await.unwrap_err();
    match err {
        FetchError::Status { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn story_decodes_item_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/101.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id": 101, "title": "Go is cool", "url": "https://golang.org", "by": "pg"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = HnClient::with_base_url(&server.uri()).unwrap();
    let story = client.story(101).await.unwrap().expect("story exists");
    assert_eq!(story.id, 101);
    assert_eq!(story.title, "Go is cool");
    assert_eq!(story.url, "https://golang.org");
}

#[tokio::test]
async fn story_null_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/999.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let client = HnClient::with_base_url(&server.uri()).unwrap();
    let story = client.story(999).await.unwrap();
    assert!(story.is_none());
}

#[tokio::test]
async fn story_surfaces_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/7.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HnClient::with_base_url(&server.uri()).unwrap();
    let err = client.story(7).await.unwrap_err();
    match err {
        FetchError::Status { status } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}
