use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both halves are present. Their format is not checked here.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    pub fn require(&self) -> Result<&Self, SearchError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(SearchError::MissingCredentials)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Similarity,
    Date,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Similarity => "sim",
            SortOrder::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCount {
    Ten,
    Twenty,
}

impl ResultCount {
    pub fn get(self) -> u32 {
        match self {
            ResultCount::Ten => 10,
            ResultCount::Twenty => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    pub result_count: ResultCount,
    pub sort_order: SortOrder,
}

impl SearchRequest {
    /// Rejects an empty or whitespace-only query.
    pub fn new(
        query: impl Into<String>,
        result_count: ResultCount,
        sort_order: SortOrder,
    ) -> Result<Self, SearchError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::MissingKeyword);
        }
        Ok(Self {
            query,
            result_count,
            sort_order,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// One raw search hit. Text fields still carry the API's markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "originallink", skip_serializing_if = "Option::is_none")]
    pub original_link: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "lastBuildDate")]
    pub last_build_date: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub display: Option<u32>,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

/// Which of the two boards is driving the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Basic,
    Trends,
}

impl Variant {
    pub fn result_count(self) -> ResultCount {
        match self {
            Variant::Basic => ResultCount::Ten,
            Variant::Trends => ResultCount::Twenty,
        }
    }

    pub fn sort_order(self) -> SortOrder {
        match self {
            Variant::Basic => SortOrder::Similarity,
            Variant::Trends => SortOrder::Date,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Basic => "📰 Naver News Live Search",
            Variant::Trends => "✨ News & Trend Insight Board",
        }
    }
}

/// Displayed in the trend board header. Never sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn last_week(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(7),
            end: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_rejected() {
        let err = SearchRequest::new("   ", ResultCount::Ten, SortOrder::Similarity).unwrap_err();
        assert!(matches!(err, SearchError::MissingKeyword));
        assert!(SearchRequest::new("테슬라", ResultCount::Ten, SortOrder::Similarity).is_ok());
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = Credentials::new("id-123", "super-secret");
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("id-123"));
        assert!(!dbg.contains("super-secret"));
        assert!(Credentials::new("id", "").require().is_err());
    }

    #[test]
    fn item_fields_default_to_empty() {
        let item: NewsItem = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        assert_eq!(item.title, "only a title");
        assert!(item.link.is_empty());
        assert!(item.pub_date.is_empty());
        assert!(item.description.is_empty());
    }

    #[test]
    fn variants_pick_their_parameters() {
        assert_eq!(Variant::Basic.result_count().get(), 10);
        assert_eq!(Variant::Basic.sort_order().as_param(), "sim");
        assert_eq!(Variant::Trends.result_count().get(), 20);
        assert_eq!(Variant::Trends.sort_order().as_param(), "date");
    }
}
