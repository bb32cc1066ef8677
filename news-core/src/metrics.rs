//! Cosmetic numbers for the trend board.
//!
//! Nothing here is derived from real search volume. The score only depends on
//! the keyword length and the day of the month, and the weekly series is drawn
//! fresh on every call.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const SCORE_RANGE: std::ops::RangeInclusive<u32> = 60..=100;
pub const INTEREST_RANGE: std::ops::RangeInclusive<u32> = 40..=100;
pub const TREND_DAYS: usize = 7;

const SCORE_BASELINE: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortuneScore {
    pub value: u32,
    /// Shown as a percent change next to the score.
    pub delta: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub interest: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: String,
}

/// Seeds a PRNG with `chars(keyword) + day_of_month` and draws once.
pub fn fortune_score(keyword: &str, day_of_month: u32) -> FortuneScore {
    let seed = keyword.chars().count() as u64 + u64::from(day_of_month);
    let mut rng = StdRng::seed_from_u64(seed);
    let value = rng.random_range(SCORE_RANGE);
    FortuneScore {
        value,
        delta: value as i32 - SCORE_BASELINE,
    }
}

pub fn fortune_score_on(keyword: &str, today: NaiveDate) -> FortuneScore {
    fortune_score(keyword, today.day())
}

/// Seven daily points ending at `today`, oldest first.
pub fn weekly_trend<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_back| TrendPoint {
            date: today - Duration::days(days_back as i64),
            interest: rng.random_range(INTEREST_RANGE),
        })
        .collect()
}

pub fn insight_tiles(score: FortuneScore) -> Vec<MetricTile> {
    vec![
        MetricTile {
            label: "Today's energy score".into(),
            value: format!("{} pts", score.value),
            delta: format!("{}%", score.delta),
        },
        MetricTile {
            label: "Search focus".into(),
            value: "High".into(),
            delta: "HOT".into(),
        },
        MetricTile {
            label: "Source reliability".into(),
            value: "92%".into(),
            delta: "Good".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_stable_for_same_length_and_day() {
        let a = fortune_score("테슬라", 19);
        let b = fortune_score("테슬라", 19);
        assert_eq!(a, b);
        // same length, same day: same seed
        assert_eq!(fortune_score("abc", 19), fortune_score("xyz", 19));
    }

    #[test]
    fn score_stays_in_range() {
        for len in 0..30 {
            let keyword = "k".repeat(len);
            for day in 1..=31 {
                let score = fortune_score(&keyword, day);
                assert!(SCORE_RANGE.contains(&score.value));
                assert_eq!(score.delta, score.value as i32 - 80);
            }
        }
    }

    #[test]
    fn trend_covers_the_last_week() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let trend = weekly_trend(today, &mut rng);
        assert_eq!(trend.len(), TREND_DAYS);
        assert_eq!(trend.first().unwrap().date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(trend.last().unwrap().date, today);
        for pair in trend.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(trend.iter().all(|p| INTEREST_RANGE.contains(&p.interest)));
    }

    #[test]
    fn tiles_show_score_and_delta() {
        let tiles = insight_tiles(FortuneScore { value: 73, delta: -7 });
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].value, "73 pts");
        assert_eq!(tiles[0].delta, "-7%");
    }
}
