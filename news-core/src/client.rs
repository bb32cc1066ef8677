use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::error::SearchError;
use crate::models::{Credentials, NewsItem, SearchRequest, SearchResponse};

pub const NAVER_NEWS_ENDPOINT: &str = "https://openapi.naver.com/v1/search/news.json";

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";
const LOGGED_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(http: Client) -> Self {
        Self::with_endpoint(http, NAVER_NEWS_ENDPOINT)
    }

    pub fn with_endpoint(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Runs one search. No retries; timeouts are whatever the HTTP client uses.
    pub async fn search(
        &self,
        credentials: &Credentials,
        request: &SearchRequest,
    ) -> Result<Vec<NewsItem>, SearchError> {
        let credentials = credentials.require()?;
        let client_id = header_value(&credentials.client_id)?;
        let client_secret = header_value(&credentials.client_secret)?;
        let display_count = request.result_count.get().to_string();
        let params = [
            ("query", request.query()),
            ("display", display_count.as_str()),
            ("sort", request.sort_order.as_param()),
        ];
        debug!(endpoint = %self.endpoint, query = request.query(), display = %display_count, sort = request.sort_order.as_param(), "sending news search");

        let response = self
            .http
            .get(&self.endpoint)
            .header(CLIENT_ID_HEADER, client_id)
            .header(CLIENT_SECRET_HEADER, client_secret)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %truncated(&body), "news search rejected");
            return Err(SearchError::from_status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)?;
        info!(
            query = request.query(),
            total = parsed.total.unwrap_or_default(),
            returned = parsed.items.len(),
            "news search completed"
        );
        Ok(parsed.items)
    }
}

/// Keys pasted with stray control or non-ASCII characters cannot go into a header.
fn header_value(raw: &str) -> Result<HeaderValue, SearchError> {
    HeaderValue::from_str(raw).map_err(|_| SearchError::InvalidCredentials)
}

fn truncated(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(LOGGED_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
