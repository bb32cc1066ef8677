use serde::Serialize;

use crate::models::NewsItem;
use crate::sanitize::clean_text;

/// At most this many entries are shown, whatever the API returned.
pub const MAX_RENDERED: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub index: usize,
    pub label: String,
    pub title: String,
    pub published_at: String,
    pub summary: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResultView {
    Entries(Vec<RenderedEntry>),
    Empty,
}

impl ResultView {
    pub fn len(&self) -> usize {
        match self {
            ResultView::Entries(entries) => entries.len(),
            ResultView::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultView::Empty)
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        match self {
            ResultView::Entries(entries) => entries,
            ResultView::Empty => &[],
        }
    }
}

pub fn render(items: &[NewsItem]) -> ResultView {
    if items.is_empty() {
        return ResultView::Empty;
    }

    let entries = items
        .iter()
        .take(MAX_RENDERED)
        .enumerate()
        .map(|(i, item)| {
            let index = i + 1;
            let title = clean_text(&item.title);
            RenderedEntry {
                index,
                label: format!("{}. {}", index, title),
                title,
                published_at: item.pub_date.clone(),
                summary: clean_text(&item.description),
                link: item.link.clone(),
            }
        })
        .collect();

    ResultView::Entries(entries)
}
