pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod models;
pub mod render;
pub mod sanitize;

pub use client::{SearchClient, NAVER_NEWS_ENDPOINT};
pub use config::{ApiConfig, AppConfig, ThemeConfig, UiConfig};
pub use dashboard::{run_search, Dashboard, Insight, SearchForm};
pub use error::{ConfigError, SearchError, Severity};
pub use metrics::{FortuneScore, MetricTile, TrendPoint};
pub use models::{
    Credentials, DateRange, NewsItem, ResultCount, SearchRequest, SearchResponse, SortOrder,
    Variant,
};
pub use render::{render, RenderedEntry, ResultView};
pub use sanitize::clean_text;
