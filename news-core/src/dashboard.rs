use chrono::NaiveDate;
use tracing::info;

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::metrics::{fortune_score_on, insight_tiles, weekly_trend, FortuneScore, MetricTile, TrendPoint};
use crate::models::{Credentials, DateRange, SearchRequest, Variant};
use crate::render::{render, ResultView};

/// Everything one button press needs. Built from the form fields and dropped afterwards.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub credentials: Credentials,
    pub keyword: String,
    pub variant: Variant,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub score: FortuneScore,
    pub tiles: Vec<MetricTile>,
    pub trend: Vec<TrendPoint>,
}

/// Render-ready result of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub keyword: String,
    pub variant: Variant,
    pub headline: String,
    pub date_range: DateRange,
    pub results: ResultView,
    pub insight: Option<Insight>,
}

impl SearchForm {
    /// Credentials are checked before the keyword.
    pub fn to_request(&self) -> Result<SearchRequest, SearchError> {
        self.credentials.require()?;
        SearchRequest::new(
            self.keyword.clone(),
            self.variant.result_count(),
            self.variant.sort_order(),
        )
    }
}

/// Handles one submit: validate, fetch, clean, and for the trend board attach
/// the cosmetic metrics. The date range is only echoed back for display.
pub async fn run_search(
    client: &SearchClient,
    form: &SearchForm,
    today: NaiveDate,
) -> Result<Dashboard, SearchError> {
    let request = form.to_request()?;
    let items = client.search(&form.credentials, &request).await?;
    let results = render(&items);
    info!(keyword = %form.keyword, variant = ?form.variant, shown = results.len(), "dashboard ready");

    let insight = match form.variant {
        Variant::Basic => None,
        Variant::Trends => {
            let score = fortune_score_on(&form.keyword, today);
            Some(Insight {
                score,
                tiles: insight_tiles(score),
                trend: weekly_trend(today, &mut rand::rng()),
            })
        }
    };

    Ok(Dashboard {
        keyword: form.keyword.clone(),
        variant: form.variant,
        headline: headline(form.variant, &form.keyword, &results),
        date_range: form.date_range,
        results,
        insight,
    })
}

fn headline(variant: Variant, keyword: &str, results: &ResultView) -> String {
    match (variant, results.is_empty()) {
        (Variant::Basic, false) => format!("Search results for '{}'.", keyword),
        (Variant::Basic, true) => "No results found.".to_string(),
        (Variant::Trends, false) => format!("🔮 Keyword insight for '{}'", keyword),
        (Variant::Trends, true) => "No news found for this period.".to_string(),
    }
}
