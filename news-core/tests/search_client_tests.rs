use reqwest::Client;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use news_core::{
    render, Credentials, ResultCount, SearchClient, SearchError, SearchRequest, SortOrder,
};

const NEWS_PATH: &str = "/v1/search/news.json";

fn three_items() -> serde_json::Value {
    serde_json::json!({
        "lastBuildDate": "Mon, 21 Oct 2024 10:00:00 +0900",
        "total": 3,
        "start": 1,
        "display": 3,
        "items": [
            {
                "title": "<b>테슬라</b> 신차 공개",
                "originallink": "https://example.com/a",
                "link": "https://n.news.naver.com/a",
                "description": "&quot;모델&quot; 발표",
                "pubDate": "Mon, 21 Oct 2024 09:00:00 +0900"
            },
            {
                "title": "<b>테슬라</b> 주가 &amp; 전망",
                "originallink": "https://example.com/b",
                "link": "https://n.news.naver.com/b",
                "description": "시장 반응",
                "pubDate": "Mon, 21 Oct 2024 08:00:00 +0900"
            },
            {
                "title": "전기차 시장",
                "originallink": "https://example.com/c",
                "link": "https://n.news.naver.com/c",
                "description": "<b>테슬라</b> 점유율",
                "pubDate": "Mon, 21 Oct 2024 07:00:00 +0900"
            }
        ]
    })
}

fn client_for(server: &MockServer) -> SearchClient {
    SearchClient::with_endpoint(Client::new(), format!("{}{}", server.uri(), NEWS_PATH))
}

fn creds() -> Credentials {
    Credentials::new("test-id", "test-secret")
}

fn tesla_request() -> SearchRequest {
    SearchRequest::new("테슬라", ResultCount::Ten, SortOrder::Similarity).unwrap()
}

#[tokio::test]
async fn ok_response_yields_items_with_links() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .and(header("X-Naver-Client-Id", "test-id"))
        .and(header("X-Naver-Client-Secret", "test-secret"))
        .and(query_param("query", "테슬라"))
        .and(query_param("display", "10"))
        .and(query_param("sort", "sim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_items()))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .search(&creds(), &tesla_request())
        .await
        .expect("search should succeed");
    assert_eq!(items.len(), 3);

    let view = render(&items);
    assert_eq!(view.len(), 3);
    for entry in view.entries() {
        assert!(!entry.link.is_empty());
    }
    assert_eq!(view.entries()[0].title, "테슬라 신차 공개");
    assert_eq!(view.entries()[1].title, "테슬라 주가 & 전망");
}

#[tokio::test]
async fn empty_items_render_as_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "total": 0, "items": [] })),
        )
        .mount(&server)
        .await;

    let items = client_for(&server).search(&creds(), &tesla_request()).await.unwrap();
    assert!(items.is_empty());
    assert!(render(&items).is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errorMessage": "Authentication failed",
            "errorCode": "024"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&creds(), &tesla_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::Unauthorized));
    assert!(err.to_string().contains("authentication failed"));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&creds(), &tesla_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::RateLimited));
    assert!(err.to_string().contains("rate limit exceeded"));
}

#[tokio::test]
async fn other_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&creds(), &tesla_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::Http { status: 500 }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(NEWS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&creds(), &tesla_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn missing_credentials_never_hit_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_items()))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&Credentials::new("", "secret"), &tesla_request())
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::MissingCredentials));
}

#[tokio::test]
async fn unsendable_credentials_are_reported_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_items()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for bad in [
        Credentials::new("test-id\r\n", "test-secret"),
        Credentials::new("test-id", "비밀키"),
    ] {
        let err = client.search(&bad, &tesla_request()).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidCredentials), "{err}");
    }
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // nothing listens on port 1
    let client = SearchClient::with_endpoint(Client::new(), "http://127.0.0.1:1/v1/search/news.json");
    let err = client.search(&creds(), &tesla_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::Network(_)));
}
